use super::query::query_provider;
use super::strategy::{QueryContext, UpstreamResult};
use ferrous_doh_domain::DomainError;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Queries every provider in the context concurrently; first success wins.
pub struct RacingStrategy;

impl RacingStrategy {
    pub fn new() -> Self {
        Self
    }

    pub async fn race(&self, ctx: &QueryContext<'_>) -> Result<UpstreamResult, DomainError> {
        if ctx.providers.is_empty() {
            return Err(DomainError::AllProvidersFailed { attempted: 0 });
        }

        debug!(strategy = "racing", providers = ctx.providers.len(), "Racing providers");

        let mut abort_handles = Vec::with_capacity(ctx.providers.len());
        let mut futs = FuturesUnordered::new();

        for provider in ctx.providers {
            let transport = Arc::clone(ctx.transport);
            let request = Arc::clone(ctx.request);
            let task_provider = provider.clone();
            let format = ctx.format;
            let timeout = ctx.timeout;

            let handle = tokio::spawn(async move {
                query_provider(transport.as_ref(), &task_provider, &request, format, timeout).await
            });
            abort_handles.push(handle.abort_handle());

            let provider = provider.clone();
            futs.push(async move { (provider, handle.await) });
        }

        let mut winner = None;
        while let Some((provider, join_result)) = futs.next().await {
            match join_result {
                Ok(Ok(r)) => {
                    debug!(provider = %r.provider, latency_ms = r.latency_ms, "Fastest response");
                    winner = Some(r);
                    break;
                }
                Ok(Err(e)) => {
                    debug!(provider = %provider, error = %e, "Racing attempt failed");
                    ctx.registry.record_failure(&provider);
                }
                Err(e) => {
                    warn!(provider = %provider, error = %e, "Racing task panicked");
                    ctx.registry.record_failure(&provider);
                }
            }
        }

        for handle in &abort_handles {
            handle.abort();
        }

        winner.ok_or(DomainError::AllProvidersFailed {
            attempted: ctx.providers.len(),
        })
    }
}

impl Default for RacingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

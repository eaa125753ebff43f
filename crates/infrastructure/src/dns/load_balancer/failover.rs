use super::query::query_provider;
use super::strategy::{QueryContext, UpstreamResult};
use ferrous_doh_domain::DomainError;
use tracing::{debug, warn};

/// Tries providers strictly one after another, in the given order.
pub struct FailoverStrategy;

impl FailoverStrategy {
    pub fn new() -> Self {
        Self
    }

    pub async fn query(&self, ctx: &QueryContext<'_>) -> Result<UpstreamResult, DomainError> {
        if ctx.providers.is_empty() {
            return Err(DomainError::AllProvidersFailed { attempted: 0 });
        }
        debug!(strategy = "failover", providers = ctx.providers.len(), "Trying sequentially");

        for (index, provider) in ctx.providers.iter().enumerate() {
            match query_provider(
                ctx.transport.as_ref(),
                provider,
                ctx.request,
                ctx.format,
                ctx.timeout,
            )
            .await
            {
                Ok(r) => {
                    debug!(provider = %r.provider, latency_ms = r.latency_ms, position = index, "Provider responded");
                    return Ok(r);
                }
                Err(e) => {
                    warn!(provider = %provider, error = %e, position = index, "Failing over");
                    ctx.registry.record_failure(provider);
                }
            }
        }
        Err(DomainError::AllProvidersFailed {
            attempted: ctx.providers.len(),
        })
    }
}

impl Default for FailoverStrategy {
    fn default() -> Self {
        Self::new()
    }
}

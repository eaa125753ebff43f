use super::failover::FailoverStrategy;
use super::racing::RacingStrategy;
use super::registry::ProviderRegistry;
use super::strategy::{QueryContext, UpstreamResult};
use async_trait::async_trait;
use ferrous_doh_application::ports::{DohAnswer, DohResolver, UpstreamTransport};
use ferrous_doh_domain::{DohQuery, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Races the healthiest providers, then falls back to the rest one by one.
pub struct RaceOrchestrator {
    registry: Arc<ProviderRegistry>,
    transport: Arc<dyn UpstreamTransport>,
    racing: RacingStrategy,
    failover: FailoverStrategy,
    racing_width: usize,
    timeout: Duration,
}

impl RaceOrchestrator {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        transport: Arc<dyn UpstreamTransport>,
        racing_width: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            registry,
            transport,
            racing: RacingStrategy::new(),
            failover: FailoverStrategy::new(),
            racing_width: racing_width.max(1),
            timeout,
        }
    }

    pub async fn race(&self, query: &DohQuery) -> Result<UpstreamResult, DomainError> {
        let ordered = self.registry.ordered_providers();
        if ordered.is_empty() {
            return Err(DomainError::AllProvidersFailed { attempted: 0 });
        }

        let split = self.racing_width.min(ordered.len());
        let (racing_set, fallback_set) = ordered.split_at(split);
        let request = Arc::new(query.upstream.clone());

        let racing_ctx = QueryContext {
            providers: racing_set,
            request: &request,
            format: query.format,
            timeout: self.timeout,
            transport: &self.transport,
            registry: &self.registry,
        };

        match self.racing.race(&racing_ctx).await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if fallback_set.is_empty() {
                    warn!(key = %query.cache_key, error = %e, "Every provider failed");
                    return Err(DomainError::AllProvidersFailed {
                        attempted: ordered.len(),
                    });
                }
                debug!(
                    key = %query.cache_key,
                    fallback = fallback_set.len(),
                    "Racing set exhausted, falling back"
                );
            }
        }

        let fallback_ctx = QueryContext {
            providers: fallback_set,
            ..racing_ctx
        };

        self.failover.query(&fallback_ctx).await.map_err(|e| {
            warn!(key = %query.cache_key, error = %e, "Every provider failed");
            DomainError::AllProvidersFailed {
                attempted: ordered.len(),
            }
        })
    }
}

#[async_trait]
impl DohResolver for RaceOrchestrator {
    async fn resolve(&self, query: &DohQuery) -> Result<DohAnswer, DomainError> {
        let result = self.race(query).await?;
        Ok(DohAnswer::from_provider(
            result.payload,
            query.format,
            result.provider,
        ))
    }
}

use crate::ports::{DohAnswer, DohResolver};
use ferrous_doh_domain::{DohQuery, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

pub struct HandleDohQueryUseCase {
    resolver: Arc<dyn DohResolver>,
}

impl HandleDohQueryUseCase {
    pub fn new(resolver: Arc<dyn DohResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, query: &DohQuery) -> Result<DohAnswer, DomainError> {
        let start = Instant::now();
        let result = self.resolver.resolve(query).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(answer) => debug!(
                key = %query.cache_key,
                provider = answer.provider.as_deref().unwrap_or("cache"),
                cache_hit = answer.cache_hit,
                bytes = answer.payload.len(),
                elapsed_ms,
                "Query resolved"
            ),
            Err(e) => warn!(key = %query.cache_key, error = %e, elapsed_ms, "Query failed"),
        }

        result
    }
}

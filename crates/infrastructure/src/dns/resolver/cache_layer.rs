use super::super::cache::ResponseCache;
use super::super::coalescing::InflightCoalescer;
use super::super::ttl::extract_ttl_or;
use async_trait::async_trait;
use ferrous_doh_application::ports::{DohAnswer, DohResolver};
use ferrous_doh_domain::{DohFormat, DohQuery, DomainError};
use std::sync::Arc;
use tracing::debug;

/// Cache lookup, in-flight deduplication and cache population around an
/// inner resolver.
pub struct CachedDohResolver {
    inner: Arc<dyn DohResolver>,
    cache: Arc<ResponseCache>,
    inflight: InflightCoalescer<DohAnswer>,
}

impl CachedDohResolver {
    pub fn new(inner: Arc<dyn DohResolver>, cache: Arc<ResponseCache>) -> Self {
        Self {
            inner,
            cache,
            inflight: InflightCoalescer::new(),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.inflight.in_flight()
    }

    pub fn check_cache(&self, query: &DohQuery) -> Option<DohAnswer> {
        self.cache.get(&query.cache_key).map(|payload| {
            debug!(key = %query.cache_key, "Cache HIT");
            DohAnswer::cached(payload, query.format)
        })
    }

    /// Runs as the in-flight leader. A previous leader may have filled the
    /// cache between our first lookup and registration, so look again.
    async fn fetch_and_store(&self, query: &DohQuery) -> Result<DohAnswer, DomainError> {
        if let Some(cached) = self.check_cache(query) {
            return Ok(cached);
        }
        debug!(key = %query.cache_key, "Cache MISS");

        let answer = self.inner.resolve(query).await?;
        let ttl = match query.format {
            DohFormat::Wire => extract_ttl_or(&answer.payload, self.cache.default_ttl()),
            DohFormat::Json => self.cache.default_ttl(),
        };
        self.cache
            .put(query.cache_key.clone(), answer.payload.clone(), Some(ttl));

        debug!(key = %query.cache_key, ttl_ms = ttl.as_millis() as u64, "Response cached");
        Ok(answer)
    }
}

#[async_trait]
impl DohResolver for CachedDohResolver {
    async fn resolve(&self, query: &DohQuery) -> Result<DohAnswer, DomainError> {
        if let Some(cached) = self.check_cache(query) {
            return Ok(cached);
        }

        self.inflight
            .coalesce(&query.cache_key, || self.fetch_and_store(query))
            .await
    }
}

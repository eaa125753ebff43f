use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::{DohFormat, DohQuery, DomainError};
use std::sync::Arc;

/// Answer returned to the client, byte-for-byte as produced by a provider.
#[derive(Debug, Clone)]
pub struct DohAnswer {
    pub payload: Bytes,
    pub format: DohFormat,
    pub cache_hit: bool,
    /// Provider that produced the payload; `None` when served from cache.
    pub provider: Option<Arc<str>>,
}

impl DohAnswer {
    pub fn from_provider(payload: Bytes, format: DohFormat, provider: Arc<str>) -> Self {
        Self {
            payload,
            format,
            cache_hit: false,
            provider: Some(provider),
        }
    }

    pub fn cached(payload: Bytes, format: DohFormat) -> Self {
        Self {
            payload,
            format,
            cache_hit: true,
            provider: None,
        }
    }
}

#[async_trait]
pub trait DohResolver: Send + Sync {
    async fn resolve(&self, query: &DohQuery) -> Result<DohAnswer, DomainError>;
}

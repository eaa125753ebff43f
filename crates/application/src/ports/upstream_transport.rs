use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::{DohFormat, DomainError, Provider, UpstreamRequest};

/// Outbound HTTP client used to reach a single provider.
///
/// Implementations return the response body on a 2xx status and map
/// everything else to a provider-level `DomainError`.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn send(
        &self,
        provider: &Provider,
        request: &UpstreamRequest,
        format: DohFormat,
    ) -> Result<Bytes, DomainError>;
}

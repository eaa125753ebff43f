use super::strategy::UpstreamResult;
use ferrous_doh_application::ports::UpstreamTransport;
use ferrous_doh_domain::{DohFormat, DomainError, Provider, UpstreamRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Execute one request against a single provider, bounded by `timeout`.
///
/// A timeout drops the in-flight transport future, which aborts the request.
pub async fn query_provider(
    transport: &dyn UpstreamTransport,
    provider: &Provider,
    request: &UpstreamRequest,
    format: DohFormat,
    timeout: Duration,
) -> Result<UpstreamResult, DomainError> {
    let start = Instant::now();

    let payload = tokio::time::timeout(timeout, transport.send(provider, request, format))
        .await
        .map_err(|_| DomainError::ProviderTimeout {
            provider: provider.name.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        })??;

    Ok(UpstreamResult {
        payload,
        provider: Arc::clone(&provider.name),
        latency_ms: start.elapsed().as_millis() as u64,
    })
}

use super::registry::ProviderRegistry;
use bytes::Bytes;
use ferrous_doh_application::ports::UpstreamTransport;
use ferrous_doh_domain::{DohFormat, Provider, UpstreamRequest};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct UpstreamResult {
    pub payload: Bytes,
    pub provider: Arc<str>,
    pub latency_ms: u64,
}

pub struct QueryContext<'a> {
    pub providers: &'a [Provider],
    pub request: &'a Arc<UpstreamRequest>,
    pub format: DohFormat,
    pub timeout: Duration,
    pub transport: &'a Arc<dyn UpstreamTransport>,
    pub registry: &'a ProviderRegistry,
}

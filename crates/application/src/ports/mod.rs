mod doh_resolver;
mod provider_health_port;
mod response_cache_port;
mod upstream_transport;

pub use doh_resolver::{DohAnswer, DohResolver};
pub use provider_health_port::{ProviderHealth, ProviderHealthPort};
pub use response_cache_port::{CacheMetricsSnapshot, ResponseCachePort};
pub use upstream_transport::UpstreamTransport;

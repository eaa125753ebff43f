pub mod cache;
pub mod coalescing;
pub mod load_balancer;
pub mod resolver;
pub mod transport;
pub mod ttl;

pub use cache::{CacheMetrics, ResponseCache, ResponseCacheConfig};
pub use coalescing::InflightCoalescer;
pub use load_balancer::{
    FailoverStrategy, HealthRecord, HealthTracker, ProviderRegistry, RaceOrchestrator,
    RacingStrategy, UpstreamResult,
};
pub use resolver::CachedDohResolver;
pub use transport::HttpsTransport;
pub use ttl::{extract_ttl, extract_ttl_or, DEFAULT_TTL};

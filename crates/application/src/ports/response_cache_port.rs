/// Snapshot of response cache metrics for API exposure.
#[derive(Debug, Clone, Default)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub hit_rate: f64,
}

/// Port for response cache operations exposed to the API layer.
pub trait ResponseCachePort: Send + Sync {
    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot;
}

use super::CacheMetrics;
use bytes::Bytes;
use dashmap::DashMap;
use ferrous_doh_application::ports::{CacheMetricsSnapshot, ResponseCachePort};
use ferrous_doh_domain::CacheKey;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

pub struct ResponseCacheConfig {
    pub max_entries: usize,
    /// Number of oldest-inserted entries dropped when the store is full.
    pub eviction_batch: usize,
    pub default_ttl: Duration,
}

impl Default for ResponseCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 5000,
            eviction_batch: 100,
            default_ttl: Duration::from_millis(300_000),
        }
    }
}

struct CacheEntry {
    payload: Bytes,
    created_at: Instant,
    ttl: Duration,
    /// Insertion order, used to pick eviction victims.
    seq: u64,
}

impl CacheEntry {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// Bounded response store with lazy TTL expiry and batch eviction on overflow.
///
/// The capacity bound is approximate under concurrent writers; eviction picks
/// the oldest-inserted entries and carries no recency signal.
pub struct ResponseCache {
    entries: DashMap<CacheKey, CacheEntry, FxBuildHasher>,
    max_entries: usize,
    eviction_batch: usize,
    default_ttl: Duration,
    next_seq: AtomicU64,
    metrics: CacheMetrics,
}

impl ResponseCache {
    pub fn new(config: ResponseCacheConfig) -> Self {
        info!(
            max_entries = config.max_entries,
            eviction_batch = config.eviction_batch,
            default_ttl_ms = config.default_ttl.as_millis() as u64,
            "Initializing response cache"
        );

        Self {
            entries: DashMap::with_capacity_and_hasher(config.max_entries, FxBuildHasher),
            max_entries: config.max_entries.max(1),
            eviction_batch: config.eviction_batch.max(1),
            default_ttl: config.default_ttl,
            next_seq: AtomicU64::new(0),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    pub fn get(&self, key: &CacheKey) -> Option<Bytes> {
        let now = Instant::now();

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(entry.payload.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired && self.entries.remove_if(key, |_, e| e.is_expired(now)).is_some() {
            self.metrics.expirations.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(key = %key, "Expired entry purged");
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    /// Stores `payload` for `ttl`, or the default TTL when `None`.
    pub fn put(&self, key: CacheKey, payload: Bytes, ttl: Option<Duration>) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_batch();
        }

        let entry = CacheEntry {
            payload,
            created_at: Instant::now(),
            ttl: ttl.unwrap_or(self.default_ttl),
            seq: self.next_seq.fetch_add(1, AtomicOrdering::Relaxed),
        };
        self.entries.insert(key, entry);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    fn evict_batch(&self) {
        let mut candidates: Vec<(u64, CacheKey)> = self
            .entries
            .iter()
            .map(|e| (e.value().seq, e.key().clone()))
            .collect();

        let batch = self.eviction_batch.min(candidates.len());
        if batch == 0 {
            return;
        }
        if batch < candidates.len() {
            candidates.select_nth_unstable_by_key(batch - 1, |(seq, _)| *seq);
        }

        let mut evicted = 0u64;
        for (_, key) in candidates.into_iter().take(batch) {
            if self.entries.remove(&key).is_some() {
                evicted += 1;
            }
        }

        self.metrics.evictions.fetch_add(evicted, AtomicOrdering::Relaxed);
        debug!(evicted, remaining = self.entries.len(), "Batch eviction");
    }
}

impl ResponseCachePort for ResponseCache {
    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.len())
    }
}

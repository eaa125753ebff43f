use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct HealthRecord {
    pub failures: u32,
    pub last_failure: Instant,
}

impl HealthRecord {
    fn is_stale(&self, now: Instant, reset_interval: Duration) -> bool {
        now.saturating_duration_since(self.last_failure) > reset_interval
    }
}

/// Per-provider failure counters with time-based decay.
///
/// Records are only written on failure. A record whose last failure is older
/// than the reset interval reads as zero failures; it is overwritten on the
/// next failure rather than deleted eagerly.
pub struct HealthTracker {
    records: DashMap<Arc<str>, HealthRecord, FxBuildHasher>,
    reset_interval: Duration,
}

impl HealthTracker {
    pub fn new(reset_interval: Duration) -> Self {
        Self {
            records: DashMap::with_hasher(FxBuildHasher),
            reset_interval,
        }
    }

    pub fn reset_interval(&self) -> Duration {
        self.reset_interval
    }

    pub fn record_failure(&self, provider: &Arc<str>) {
        let now = Instant::now();
        let mut entry = self
            .records
            .entry(Arc::clone(provider))
            .or_insert(HealthRecord {
                failures: 0,
                last_failure: now,
            });

        if entry.is_stale(now, self.reset_interval) {
            entry.failures = 0;
        }
        entry.failures = entry.failures.saturating_add(1);
        entry.last_failure = now;

        if entry.failures == 1 {
            debug!(provider = %provider, "Provider failure recorded");
        } else {
            warn!(provider = %provider, failures = entry.failures, "Provider failing repeatedly");
        }
    }

    /// Live failure count; zero when no record exists or the record has decayed.
    pub fn failure_count(&self, provider: &str) -> u32 {
        let now = Instant::now();
        self.records
            .get(provider)
            .filter(|r| !r.is_stale(now, self.reset_interval))
            .map(|r| r.failures)
            .unwrap_or(0)
    }

    pub fn get_health_info(&self, provider: &str) -> Option<HealthRecord> {
        let now = Instant::now();
        self.records
            .get(provider)
            .filter(|r| !r.is_stale(now, self.reset_interval))
            .map(|r| *r)
    }
}

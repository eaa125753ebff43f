use dashmap::DashMap;
use ferrous_doh_domain::{CacheKey, DomainError};
use rustc_hash::FxBuildHasher;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

type InflightResult<T> = Result<T, DomainError>;
type InflightSender<T> = Arc<watch::Sender<Option<InflightResult<T>>>>;
type InflightMap<T> = Arc<DashMap<CacheKey, InflightSender<T>, FxBuildHasher>>;

enum Role<T> {
    Leader(InflightLeaderGuard<T>),
    Follower(watch::Receiver<Option<InflightResult<T>>>),
}

/// Deregisters the in-flight record however the leader finishes.
///
/// A leader that is dropped before completing publishes `None`, which sends
/// its followers back to race for leadership.
struct InflightLeaderGuard<T> {
    inflight: InflightMap<T>,
    key: CacheKey,
    completed: bool,
}

impl<T> InflightLeaderGuard<T> {
    fn complete(mut self, result: InflightResult<T>) {
        if let Some((_, tx)) = self.inflight.remove(&self.key) {
            tx.send_replace(Some(result));
        }
        self.completed = true;
    }
}

impl<T> Drop for InflightLeaderGuard<T> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        if let Some((_, tx)) = self.inflight.remove(&self.key) {
            tx.send_replace(None);
        }
    }
}

/// At most one producer runs per key; concurrent callers share its outcome.
pub struct InflightCoalescer<T> {
    inflight: InflightMap<T>,
}

impl<T: Clone + Send + Sync + 'static> InflightCoalescer<T> {
    pub fn new() -> Self {
        Self {
            inflight: Arc::new(DashMap::with_hasher(FxBuildHasher)),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.inflight.len()
    }

    /// Runs `producer` unless a fetch for `key` is already pending, in which
    /// case the pending outcome (success or error) is awaited and returned.
    pub async fn coalesce<F, Fut>(&self, key: &CacheKey, producer: F) -> InflightResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = InflightResult<T>>,
    {
        loop {
            let rx = match self.register_or_join(key) {
                Role::Leader(guard) => {
                    let result = producer().await;
                    guard.complete(result.clone());
                    return result;
                }
                Role::Follower(rx) => rx,
            };

            if let Some(result) = Self::follow(rx).await {
                return result;
            }
            debug!(key = %key, "In-flight leader abandoned, retrying");
        }
    }

    fn register_or_join(&self, key: &CacheKey) -> Role<T> {
        match self.inflight.entry(key.clone()) {
            dashmap::Entry::Occupied(e) => {
                let rx = e.get().subscribe();
                drop(e);
                Role::Follower(rx)
            }
            dashmap::Entry::Vacant(e) => {
                let (tx, _rx) = watch::channel(None);
                e.insert(Arc::new(tx));
                Role::Leader(InflightLeaderGuard {
                    inflight: Arc::clone(&self.inflight),
                    key: key.clone(),
                    completed: false,
                })
            }
        }
    }

    async fn follow(
        mut rx: watch::Receiver<Option<InflightResult<T>>>,
    ) -> Option<InflightResult<T>> {
        let _ = rx.changed().await;
        let result = rx.borrow_and_update().clone();
        result
    }
}

impl<T: Clone + Send + Sync + 'static> Default for InflightCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

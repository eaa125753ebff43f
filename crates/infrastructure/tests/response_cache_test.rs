use bytes::Bytes;
use ferrous_doh_application::ports::ResponseCachePort;
use ferrous_doh_domain::CacheKey;
use ferrous_doh_infrastructure::dns::{ResponseCache, ResponseCacheConfig};
use std::time::Duration;

fn create_cache(max_entries: usize, eviction_batch: usize) -> ResponseCache {
    ResponseCache::new(ResponseCacheConfig {
        max_entries,
        eviction_batch,
        default_ttl: Duration::from_millis(300_000),
    })
}

fn key(n: usize) -> CacheKey {
    CacheKey::for_json(&format!("host{}.example.com", n), "A")
}

#[test]
fn test_put_then_get_returns_identical_bytes() {
    let cache = create_cache(100, 10);
    let payload = Bytes::from_static(&[0x00, 0xff, 0x10, 0x80, 0x7f]);

    cache.put(key(1), payload.clone(), None);

    assert_eq!(cache.get(&key(1)), Some(payload));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_get_missing_key_is_miss() {
    let cache = create_cache(100, 10);
    assert!(cache.get(&key(1)).is_none());

    let snapshot = cache.cache_metrics_snapshot();
    assert_eq!(snapshot.misses, 1);
    assert_eq!(snapshot.hits, 0);
}

#[test]
fn test_put_overwrites_existing_entry() {
    let cache = create_cache(100, 10);
    cache.put(key(1), Bytes::from_static(b"old"), None);
    cache.put(key(1), Bytes::from_static(b"new"), None);

    assert_eq!(cache.get(&key(1)), Some(Bytes::from_static(b"new")));
    assert_eq!(cache.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_entry_hits_before_ttl_and_misses_at_ttl() {
    let cache = create_cache(100, 10);
    cache.put(key(1), Bytes::from_static(b"answer"), Some(Duration::from_millis(1000)));

    tokio::time::advance(Duration::from_millis(999)).await;
    assert!(cache.get(&key(1)).is_some());

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(cache.get(&key(1)).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_expired_entry_is_purged_on_read() {
    let cache = create_cache(100, 10);
    cache.put(key(1), Bytes::from_static(b"answer"), Some(Duration::from_secs(5)));
    cache.put(key(2), Bytes::from_static(b"answer"), Some(Duration::from_secs(60)));

    tokio::time::advance(Duration::from_secs(10)).await;

    assert_eq!(cache.len(), 2);
    assert!(cache.get(&key(1)).is_none());
    assert_eq!(cache.len(), 1);
    assert!(cache.get(&key(2)).is_some());

    let snapshot = cache.cache_metrics_snapshot();
    assert_eq!(snapshot.expirations, 1);
}

#[tokio::test(start_paused = true)]
async fn test_default_ttl_applies_when_none_given() {
    let cache = create_cache(100, 10);
    cache.put(key(1), Bytes::from_static(b"answer"), None);

    tokio::time::advance(Duration::from_millis(299_999)).await;
    assert!(cache.get(&key(1)).is_some());

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(cache.get(&key(1)).is_none());
}

#[test]
fn test_store_never_exceeds_capacity() {
    let cache = create_cache(50, 10);

    for n in 0..500 {
        cache.put(key(n), Bytes::from(format!("payload-{}", n)), None);
        assert!(cache.len() <= 50, "cache grew to {} entries", cache.len());
    }
}

#[test]
fn test_eviction_removes_oldest_inserted_batch() {
    let cache = create_cache(50, 10);

    for n in 0..50 {
        cache.put(key(n), Bytes::from_static(b"x"), None);
    }
    assert_eq!(cache.len(), 50);

    cache.put(key(50), Bytes::from_static(b"x"), None);

    assert_eq!(cache.len(), 41);
    for n in 0..10 {
        assert!(cache.get(&key(n)).is_none(), "key {} should be evicted", n);
    }
    for n in 10..=50 {
        assert!(cache.get(&key(n)).is_some(), "key {} should survive", n);
    }
    assert_eq!(cache.cache_metrics_snapshot().evictions, 10);
}

#[test]
fn test_overwrite_at_capacity_does_not_evict() {
    let cache = create_cache(5, 2);
    for n in 0..5 {
        cache.put(key(n), Bytes::from_static(b"x"), None);
    }

    cache.put(key(0), Bytes::from_static(b"y"), None);

    assert_eq!(cache.len(), 5);
    assert_eq!(cache.cache_metrics_snapshot().evictions, 0);
}

#[test]
fn test_metrics_snapshot_counts() {
    let cache = create_cache(100, 10);
    cache.put(key(1), Bytes::from_static(b"x"), None);
    cache.get(&key(1));
    cache.get(&key(1));
    cache.get(&key(2));

    let snapshot = cache.cache_metrics_snapshot();
    assert_eq!(snapshot.total_entries, 1);
    assert_eq!(snapshot.insertions, 1);
    assert_eq!(snapshot.hits, 2);
    assert_eq!(snapshot.misses, 1);
    assert!((snapshot.hit_rate - 66.666).abs() < 0.01);
    assert_eq!(cache.len(), 1);
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Entries dropped at once when the store is full.
    #[serde(default = "default_eviction_batch")]
    pub eviction_batch: usize,

    #[serde(default = "default_ttl_ms")]
    pub default_ttl_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_max_entries(),
            eviction_batch: default_eviction_batch(),
            default_ttl_ms: default_ttl_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_entries() -> usize {
    5000
}

fn default_eviction_batch() -> usize {
    100
}

fn default_ttl_ms() -> u64 {
    300_000
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthConfig {
    /// Failure records older than this stop influencing provider order.
    #[serde(default = "default_reset_interval_ms")]
    pub reset_interval_ms: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            reset_interval_ms: default_reset_interval_ms(),
        }
    }
}

fn default_reset_interval_ms() -> u64 {
    60_000
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RaceConfig {
    /// Number of healthiest providers queried concurrently.
    #[serde(default = "default_racing_width")]
    pub racing_width: usize,

    /// Per-attempt timeout, applied to racing and fallback attempts alike.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            racing_width: default_racing_width(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_racing_width() -> usize {
    3
}

fn default_timeout_ms() -> u64 {
    3000
}

use serde::{Deserialize, Serialize};

/// Prefetch settings for popular entries that are about to expire.
///
/// An `amount` of 0 disables prefetching.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrefetchConfig {
    /// Hits needed inside `window_secs` before an entry qualifies.
    #[serde(default)]
    pub amount: u32,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Remaining TTL, as a percentage of the stored TTL, at or below which
    /// a qualifying entry is refreshed.
    #[serde(default = "default_percentage")]
    pub percentage: u8,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            amount: 0,
            window_secs: default_window_secs(),
            percentage: default_percentage(),
        }
    }
}

impl PrefetchConfig {
    pub fn is_enabled(&self) -> bool {
        self.amount > 0
    }
}

fn default_window_secs() -> u64 {
    60
}

fn default_percentage() -> u8 {
    10
}

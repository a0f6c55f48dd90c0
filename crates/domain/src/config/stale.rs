use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StaleConfig {
    /// How long past expiry an entry may still be answered from.
    /// 0 disables stale serving.
    #[serde(default)]
    pub window_secs: u64,
}

impl StaleConfig {
    pub fn is_enabled(&self) -> bool {
        self.window_secs > 0
    }
}

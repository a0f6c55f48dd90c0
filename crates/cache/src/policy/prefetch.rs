use crate::entry::CacheEntry;
use answer_cache_domain::PrefetchConfig;
use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;
use tracing::debug;

/// Refresh popular entries shortly before they expire.
///
/// An entry qualifies once it has been hit `amount` times with no gap longer
/// than `window`, and its remaining TTL has dropped to `percentage` percent
/// of the stored TTL (rounded up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchPolicy {
    pub amount: u32,
    pub window: Duration,
    pub percentage: u8,
}

impl PrefetchPolicy {
    pub fn disabled() -> Self {
        Self {
            amount: 0,
            window: Duration::from_secs(60),
            percentage: 10,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.amount > 0
    }

    /// Records a hit on `entry` at `now` and reports whether it should be
    /// refreshed ahead of expiry.
    ///
    /// A disabled policy records nothing.
    pub fn should_prefetch<Tz: TimeZone>(&self, entry: &CacheEntry, now: DateTime<Tz>) -> bool {
        if !self.is_enabled() {
            return false;
        }

        let now = now.with_timezone(&Utc);
        let hits = entry.freq().update(self.window, now);
        let remaining = entry.remaining_ttl(now);
        let threshold = self.threshold_secs(entry.original_ttl());

        let prefetch = hits >= self.amount && remaining <= threshold;
        if prefetch {
            debug!(
                hits,
                remaining_ttl = remaining,
                threshold,
                "Prefetch triggered"
            );
        }
        prefetch
    }

    #[inline]
    fn threshold_secs(&self, original_ttl: u32) -> i64 {
        (i64::from(self.percentage) * i64::from(original_ttl) + 99) / 100
    }
}

impl Default for PrefetchPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

impl From<&PrefetchConfig> for PrefetchPolicy {
    fn from(config: &PrefetchConfig) -> Self {
        Self {
            amount: config.amount,
            window: Duration::from_secs(config.window_secs),
            percentage: config.percentage,
        }
    }
}

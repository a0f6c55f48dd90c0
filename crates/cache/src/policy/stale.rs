use crate::entry::CacheEntry;
use answer_cache_domain::StaleConfig;
use chrono::{DateTime, TimeZone};
use std::time::Duration;
use tracing::debug;

/// Serve expired entries for a grace period after their TTL runs out.
///
/// A zero `window` admits only fresh entries. Stale replies are rendered
/// with TTL 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StalePolicy {
    pub window: Duration,
}

impl StalePolicy {
    pub fn is_servable<Tz: TimeZone>(&self, entry: &CacheEntry, now: DateTime<Tz>) -> bool {
        let remaining = entry.remaining_ttl(now);
        if remaining > 0 {
            return true;
        }

        let expired_for = remaining.saturating_neg();
        let window = i64::try_from(self.window.as_secs()).unwrap_or(i64::MAX);
        let servable = expired_for < window;
        if servable {
            debug!(expired_for_secs = expired_for, "Serving stale entry");
        }
        servable
    }
}

impl From<&StaleConfig> for StalePolicy {
    fn from(config: &StaleConfig) -> Self {
        Self {
            window: Duration::from_secs(config.window_secs),
        }
    }
}

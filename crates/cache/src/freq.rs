use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct FreqState {
    last: Option<DateTime<Utc>>,
    hits: u32,
}

/// Sliding-window hit counter carried by every cache entry.
///
/// Owned and mutated only by the eviction/prefetch component. Building or
/// rendering an entry never touches it, so readers of the entry's answer
/// data never contend on this lock.
#[derive(Debug, Default)]
pub struct Freq {
    state: Mutex<FreqState>,
}

impl Freq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit at `now` and returns the resulting hit count.
    ///
    /// When the previous hit is older than `now - window` (or there was
    /// none) the count restarts at 1.
    pub fn update<Tz: TimeZone>(&self, window: Duration, now: DateTime<Tz>) -> u32 {
        let now = now.with_timezone(&Utc);
        let mut state = self.lock();

        let within_window = match (state.last, TimeDelta::from_std(window)) {
            (Some(last), Ok(window)) => now.signed_duration_since(last) <= window,
            (Some(_), Err(_)) => true,
            (None, _) => false,
        };

        state.hits = if within_window {
            state.hits.saturating_add(1)
        } else {
            1
        };
        state.last = Some(now);
        state.hits
    }

    pub fn hits(&self) -> u32 {
        self.lock().hits
    }

    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.lock().last
    }

    pub fn reset<Tz: TimeZone>(&self, now: DateTime<Tz>, hits: u32) {
        let mut state = self.lock();
        state.last = Some(now.with_timezone(&Utc));
        state.hits = hits;
    }

    fn lock(&self) -> MutexGuard<'_, FreqState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

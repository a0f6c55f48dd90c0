//! Decisions the owning cache makes about an entry on each hit.
//!
//! These read the entry's remaining TTL and, for prefetch, record the hit in
//! its frequency counter. They never alter the answer data.

pub mod prefetch;
pub mod stale;

pub use prefetch::PrefetchPolicy;
pub use stale::StalePolicy;

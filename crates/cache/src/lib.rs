//! Answer cache entries.
//!
//! A [`CacheEntry`] keeps the reusable part of an upstream DNS response and
//! renders a reply tailored to each client that hits it: TTLs decayed by the
//! time spent in cache, DNSSEC records withheld from clients that did not ask
//! for them, and header bits adjusted for stub-resolver compatibility.
//!
//! Storage, key computation and expiry sweeping belong to the caller; every
//! operation here takes the current time as an argument.

pub mod dnssec;
pub mod entry;
pub mod freq;
pub mod policy;
pub mod reply;

pub use dnssec::{is_dnssec_record, is_dnssec_type, is_hop_by_hop};
pub use entry::CacheEntry;
pub use freq::Freq;
pub use policy::{PrefetchPolicy, StalePolicy};
pub use reply::{dnssec_ok, reply_for};

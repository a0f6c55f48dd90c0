//! Answer Cache Domain Layer
pub mod config;

pub use config::{CacheConfig, ConfigError, PrefetchConfig, StaleConfig};

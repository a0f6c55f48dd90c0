pub mod errors;
pub mod prefetch;
pub mod root;
pub mod stale;

pub use errors::ConfigError;
pub use prefetch::PrefetchConfig;
pub use root::CacheConfig;
pub use stale::StaleConfig;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::prefetch::PrefetchConfig;
use super::stale::StaleConfig;

/// Policy configuration for the answer cache
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Prefetch of popular entries nearing expiry
    #[serde(default)]
    pub prefetch: PrefetchConfig,

    /// Answering from expired entries
    #[serde(default)]
    pub serve_stale: StaleConfig,
}

impl CacheConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::FileRead {
                path: path.to_string(),
                source,
            })?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefetch.percentage > 100 {
            return Err(ConfigError::Validation(format!(
                "Prefetch percentage must be between 0 and 100, got {}",
                self.prefetch.percentage
            )));
        }

        if self.prefetch.is_enabled() && self.prefetch.window_secs == 0 {
            return Err(ConfigError::Validation(
                "Prefetch window cannot be 0 when prefetch is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

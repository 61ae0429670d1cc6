//! Site configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration
//! at all) yields the stock behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::DEFAULT_SUCCESS_TIMEOUT_MS;
use crate::storage::DARK_MODE_KEY;

/// Longest delay a browser timer accepts (a signed 32-bit millisecond count).
pub const MAX_TIMER_DELAY_MS: u32 = i32::MAX as u32;

/// Convert a configured delay to the argument `setTimeout`/`setInterval` take.
pub fn timer_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown log level: {0}")]
    LogLevel(String),
}

/// Particle emitter timing and limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles created in the startup burst.
    pub burst_count: u32,
    /// Spacing of the startup burst.
    pub burst_interval_ms: u32,
    /// Steady-state spawn interval.
    pub interval_ms: u32,
    /// Upper bound on concurrently live particles.
    pub max_live: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            burst_count: 25,
            burst_interval_ms: 150,
            interval_ms: 500,
            max_live: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long the success message stays visible.
    pub success_timeout_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            success_timeout_ms: DEFAULT_SUCCESS_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub particles: ParticleConfig,
    pub contact: ContactConfig,
    /// `localStorage` key for the dark-mode flag.
    pub storage_key: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            particles: ParticleConfig::default(),
            contact: ContactConfig::default(),
            storage_key: DARK_MODE_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON configuration and check the log level.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.level()?;
        Ok(config)
    }

    /// The configured log level.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

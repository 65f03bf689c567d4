//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honoured for local development.

use std::env;
use std::path::PathBuf;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for long-lived key-value state
    pub storage_dir: PathBuf,
    /// Schedule grid scale
    pub pixels_per_hour: f64,
    /// Block height used when a schedule entry has no usable times
    pub fallback_block_height: f64,
    /// Delay before a notification starts its exit transition
    pub notification_fade_ms: u64,
    /// Delay before a notification is dismissed
    pub notification_dismiss_ms: u64,
    /// Date id (MMDDYYYY) the schedule views open on
    pub default_date: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".locaylo"),
            pixels_per_hour: 60.0,
            fallback_block_height: 60.0,
            notification_fade_ms: 4500,
            notification_dismiss_ms: 5000,
            default_date: crate::catalog::DEFAULT_DATE_ID.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, defaulting anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        let config = Self {
            storage_dir: env::var("LOCAYLO_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            pixels_per_hour: parse_var("LOCAYLO_PIXELS_PER_HOUR", defaults.pixels_per_hour)?,
            fallback_block_height: parse_var(
                "LOCAYLO_FALLBACK_BLOCK_HEIGHT",
                defaults.fallback_block_height,
            )?,
            notification_fade_ms: parse_var(
                "LOCAYLO_NOTIFICATION_FADE_MS",
                defaults.notification_fade_ms,
            )?,
            notification_dismiss_ms: parse_var(
                "LOCAYLO_NOTIFICATION_DISMISS_MS",
                defaults.notification_dismiss_ms,
            )?,
            default_date: env::var("LOCAYLO_DEFAULT_DATE").unwrap_or(defaults.default_date),
        };

        if config.pixels_per_hour <= 0.0 {
            return Err(ConfigError::Invalid("LOCAYLO_PIXELS_PER_HOUR"));
        }
        if config.notification_fade_ms > config.notification_dismiss_ms {
            return Err(ConfigError::Invalid("LOCAYLO_NOTIFICATION_FADE_MS"));
        }
        crate::time_utils::parse_date_id(&config.default_date)
            .map_err(|_| ConfigError::Invalid("LOCAYLO_DEFAULT_DATE"))?;

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

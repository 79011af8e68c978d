use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Level;
use crate::infrastructure::logging::{is_valid_timestamp_format, LogConfig};

/// Project config file, created by the embedding application
pub const CONFIG_FILE: &str = "logbridge.yaml";

/// Local overrides, optional and usually not checked in
pub const LOCAL_CONFIG_FILE: &str = "logbridge.local.yaml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "LOGBRIDGE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Invalid log level: {0}. Must be one of: panic, fatal, error, warn, info, debug, trace"
    )]
    InvalidLogLevel(String),

    #[error("timestamp_format cannot be empty; omit it to use RFC 3339")]
    EmptyTimestampFormat,

    #[error("Invalid timestamp_format: {0}")]
    InvalidTimestampFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. logbridge.yaml in the working directory
    /// 3. logbridge.local.yaml in the working directory (optional)
    /// 4. Environment variables (LOGBRIDGE_* prefix, highest priority)
    pub fn load() -> Result<LogConfig> {
        Self::load_from_files([CONFIG_FILE, LOCAL_CONFIG_FILE])
    }

    /// Load configuration from the given files, in order, then the environment
    ///
    /// Missing files are skipped.
    pub fn load_from_files<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<LogConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(LogConfig::default()));
        for path in paths {
            figment = figment.merge(Yaml::file(path.as_ref()));
        }

        let config: LogConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, without environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<LogConfig> {
        let config: LogConfig = Figment::new()
            .merge(Serialized::defaults(LogConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &LogConfig) -> Result<(), ConfigError> {
        if config.level.parse::<Level>().is_err() {
            return Err(ConfigError::InvalidLogLevel(config.level.clone()));
        }

        if let Some(format) = config.timestamp_format.as_deref() {
            if format.trim().is_empty() {
                return Err(ConfigError::EmptyTimestampFormat);
            }
            if !is_valid_timestamp_format(format) {
                return Err(ConfigError::InvalidTimestampFormat(format.to_string()));
            }
        }

        Ok(())
    }
}

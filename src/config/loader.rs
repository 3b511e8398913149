use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/formstate/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("formstate").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Persistent form names are non-empty and unique
    /// - The log filter is a valid `EnvFilter` directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for name in &self.forms.persistent {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Persistent form names must not be empty".to_string(),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Persistent form '{}' is listed twice", name),
                });
            }
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid log filter '{}': {}", self.logging.filter, e),
            });
        }

        Ok(())
    }
}

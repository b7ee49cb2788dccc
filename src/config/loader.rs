use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::generate::is_known_aspect_ratio;

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

impl ConfigError {
    fn validation(message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            message: message.into(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/muse-inspire/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("muse-inspire").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

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
    /// - The bind address parses as a socket address
    /// - The generation gallery is not empty
    /// - `1 <= default_count <= max_count`
    /// - The default aspect ratio is a known one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::validation(format!(
                "Invalid server bind address '{}'",
                self.server.bind_addr
            )));
        }

        let generation = &self.generation;
        if generation.gallery.is_empty() {
            return Err(ConfigError::validation(
                "Generation gallery must contain at least one image",
            ));
        }

        if generation.default_count == 0 || generation.default_count > generation.max_count {
            return Err(ConfigError::validation(format!(
                "Generation default_count ({}) must be between 1 and max_count ({})",
                generation.default_count, generation.max_count
            )));
        }

        if !is_known_aspect_ratio(&generation.default_aspect_ratio) {
            return Err(ConfigError::validation(format!(
                "Unknown default aspect ratio '{}'",
                generation.default_aspect_ratio
            )));
        }

        Ok(())
    }
}

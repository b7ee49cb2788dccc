use serde::{Deserialize, Serialize};

use crate::generate::DEFAULT_ASPECT_RATIO;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the studio server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Settings for the mock image generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Simulated model latency in milliseconds (default: 2500).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Images per request when the request omits a count (default: 4).
    #[serde(default = "default_count")]
    pub default_count: u32,
    /// Upper bound on images per request (default: 8).
    #[serde(default = "default_max_count")]
    pub max_count: u32,
    /// Aspect ratio used when the request omits one.
    #[serde(default = "default_aspect_ratio")]
    pub default_aspect_ratio: String,
    /// Image URLs the generator rotates through.
    #[serde(default = "default_gallery")]
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_delay_ms() -> u64 {
    2500
}

fn default_count() -> u32 {
    4
}

fn default_max_count() -> u32 {
    8
}

fn default_aspect_ratio() -> String {
    DEFAULT_ASPECT_RATIO.to_string()
}

fn default_gallery() -> Vec<String> {
    (1..=8)
        .map(|n| format!("/images/gallery/art-{n:02}.jpg"))
        .collect()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            default_count: default_count(),
            max_count: default_max_count(),
            default_aspect_ratio: default_aspect_ratio(),
            gallery: default_gallery(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

//! Board Configuration
//!
//! Centralized configuration for the board, loaded with the following
//! priority (highest first):
//!
//! 1. Environment variables (`QUOTEBOARD_*`)
//! 2. TOML configuration file
//! 3. Default values
//!
//! The configuration file follows the XDG Base Directory layout:
//! `$XDG_CONFIG_HOME/quoteboard/board.toml` (typically
//! `~/.config/quoteboard/board.toml`).
//!
//! # Example Configuration
//!
//! ```toml
//! [source]
//! endpoint = "https://api.kanye.rest"
//! request_timeout_ms = 10000
//!
//! [reveal]
//! interval_ms = 50
//!
//! [audio]
//! asset = "assets/typing.wav"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default quote endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.kanye.rest";

/// Default HTTP request timeout in milliseconds.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Default typewriter tick interval in milliseconds.
const DEFAULT_REVEAL_INTERVAL_MS: u64 = 50;

/// Default path of the looping typing sound, relative to the working
/// directory. The asset is a fixed resource, not user content.
const DEFAULT_AUDIO_ASSET: &str = "assets/typing.wav";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// `[source]` section of the TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceToml {
    /// Quote endpoint base URL.
    pub endpoint: Option<String>,
    /// HTTP request timeout in milliseconds.
    pub request_timeout_ms: Option<u64>,
}

/// `[reveal]` section of the TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealToml {
    /// Typewriter tick interval in milliseconds.
    pub interval_ms: Option<u64>,
}

/// `[audio]` section of the TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioToml {
    /// Path to the looping typing sound.
    pub asset: Option<String>,
}

/// Full TOML file shape. Every field is optional; absent values fall
/// back to defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardToml {
    /// Quote source settings.
    pub source: SourceToml,
    /// Reveal timing settings.
    pub reveal: RevealToml,
    /// Audio settings.
    pub audio: AudioToml,
}

/// Resolved board configuration.
#[derive(Clone, Debug)]
pub struct BoardConfig {
    /// Quote endpoint base URL.
    pub endpoint: String,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Typewriter tick interval.
    pub reveal_interval: Duration,
    /// Path to the looping typing sound (consumed by surfaces).
    pub audio_asset: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            reveal_interval: Duration::from_millis(DEFAULT_REVEAL_INTERVAL_MS),
            audio_asset: PathBuf::from(DEFAULT_AUDIO_ASSET),
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by environment variables only.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Apply the values present in a parsed TOML file.
    fn apply_file(&mut self, file: &BoardToml) {
        if let Some(ref endpoint) = file.source.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(ms) = file.source.request_timeout_ms {
            self.request_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = file.reveal.interval_ms {
            self.reveal_interval = Duration::from_millis(ms);
        }
        if let Some(ref asset) = file.audio.asset {
            self.audio_asset = PathBuf::from(asset);
        }
    }

    /// Apply environment overrides through an injectable lookup, so tests
    /// don't have to mutate process-wide environment state.
    fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = get("QUOTEBOARD_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(ms) = get("QUOTEBOARD_REQUEST_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.request_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = get("QUOTEBOARD_REVEAL_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.reveal_interval = Duration::from_millis(ms);
        }
        if let Some(asset) = get("QUOTEBOARD_AUDIO_ASSET") {
            self.audio_asset = PathBuf::from(asset);
        }
    }

    /// Reject configurations the board cannot run with.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ValidationError(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default config file path under the XDG config directory, if one is
/// known for this platform.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quoteboard").join("board.toml"))
}

/// Load configuration: defaults, then the default config file (if it
/// exists), then environment overrides.
pub async fn load_config() -> Result<BoardConfig, ConfigError> {
    match default_config_path() {
        Some(path) if path.exists() => load_config_from_path(&path).await,
        _ => {
            let mut config = BoardConfig::from_env();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Load configuration from a specific TOML file, then apply environment
/// overrides on top.
pub async fn load_config_from_path(path: &Path) -> Result<BoardConfig, ConfigError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
    let file: BoardToml = toml::from_str(&raw)?;

    let mut config = BoardConfig::default();
    config.apply_file(&file);
    config.apply_env(|key| std::env::var(key).ok());
    config.validate()?;

    tracing::info!(path = %path.display(), "loaded board configuration");
    Ok(config)
}

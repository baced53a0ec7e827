//! Configuration Loader
//!
//! Loads the optional explorer TOML config. Every field has a default, so a
//! missing file yields a fully usable configuration pointing at the local
//! backend. The API base URL can also be overridden through the
//! `ATTENTION_API_BASE_URL` environment variable.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default API base URL when neither file nor environment provide one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:81";

/// Environment variable overriding `[api] base_url`
pub const API_BASE_URL_ENV: &str = "ATTENTION_API_BASE_URL";

/// Main configuration structure matching explorer.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiSection,
    pub explorer: ExplorerSection,
}

/// Attention-market API configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Base URL of the attention-market backend
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiSection {
    /// Base URL with environment variable override.
    /// Checks `ATTENTION_API_BASE_URL` first, falls back to the config value.
    pub fn resolved_base_url(&self) -> String {
        std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| self.base_url.clone())
    }
}

/// Block-explorer link configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExplorerSection {
    /// Base URL of the external block explorer
    pub base_url: String,
    /// Cluster query parameter appended to every deep link
    pub cluster: String,
}

impl Default for ExplorerSection {
    fn default() -> Self {
        Self {
            base_url: "https://explorer.sonic.game".to_string(),
            cluster: "testnet.v1".to_string(),
        }
    }
}

impl ExplorerSection {
    /// Deep link to an on-chain address
    pub fn address_url(&self, address: &str) -> String {
        format!(
            "{}/address/{}?cluster={}",
            self.base_url, address, self.cluster
        )
    }

    /// Deep link to a transaction signature
    pub fn tx_url(&self, signature: &str) -> String {
        format!("{}/tx/{}?cluster={}", self.base_url, signature, self.cluster)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url cannot be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "api.timeout_secs must be > 0, got {}",
                self.api.timeout_secs
            )));
        }

        if self.explorer.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "explorer.base_url cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

//! Configuration Module
//!
//! Loads and validates configuration from TOML files, with defaults suitable
//! for a local backend and an environment override for the API base URL.

pub mod loader;

pub use loader::{
    load_config, load_or_default, ApiSection, Config, ConfigError, ExplorerSection,
    API_BASE_URL_ENV, DEFAULT_API_BASE_URL,
};

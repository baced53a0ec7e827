//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - API: attention-market HTTP client and URL resolver
//! - CLI: command-line argument definitions

pub mod api;
pub mod cli;

pub use api::AttentionApiClient;
pub use cli::CliApp;

//! Attention Market API Adapter
//!
//! HTTP implementation of the market data port plus the URL resolver that
//! composes request URLs from the configured base.

mod client;
mod url;

pub use client::{trades_path, ApiConfig, AttentionApiClient, MARKETS_PATH};
pub use url::join_api_url;

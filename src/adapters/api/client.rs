//! Attention Market API Client
//!
//! HTTP client for the attention-market backend. Two read endpoints: the full
//! market listing and per-market trade history. Each view fetch is a single
//! attempt; there is no retry or polling on this path.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::url::join_api_url;
use crate::config::{Config, DEFAULT_API_BASE_URL};
use crate::domain::{Market, MarketQuery, Trade};
use crate::ports::market_data::{MarketDataError, MarketDataPort};

use async_trait::async_trait;

/// Relative path of the market-listing endpoint
pub const MARKETS_PATH: &str = "api/markets/attention/";

/// Relative path of the trade-history endpoint for one market
pub fn trades_path(identifier: &str) -> String {
    format!("api/markets/attention/trades/{}", identifier)
}

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the attention-market backend
#[derive(Debug, Clone)]
pub struct AttentionApiClient {
    config: ApiConfig,
    http: Client,
}

impl AttentionApiClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(ApiConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ApiConfig) -> Result<Self, MarketDataError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MarketDataError::Transport(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Create a client from the application configuration, applying the
    /// environment override for the base URL
    pub fn from_app_config(config: &Config) -> Result<Self, MarketDataError> {
        Self::with_config(ApiConfig {
            base_url: config.api.resolved_base_url(),
            timeout: Duration::from_secs(config.api.timeout_secs),
        })
    }

    /// Fetch the full market list
    pub async fn get_markets(&self) -> Result<Vec<Market>, MarketDataError> {
        self.fetch_json(MARKETS_PATH, MarketDataError::FetchMarkets)
            .await
    }

    /// Fetch the trade history for one market
    pub async fn get_trades(&self, query: &MarketQuery) -> Result<Vec<Trade>, MarketDataError> {
        self.fetch_json(&trades_path(&query.identifier()), MarketDataError::FetchTrades)
            .await
    }

    /// Issue one GET request and parse the JSON body.
    ///
    /// Non-2xx maps to the endpoint's fixed error; connect and parse failures
    /// surface the underlying description.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        status_error: MarketDataError,
    ) -> Result<T, MarketDataError> {
        let url = join_api_url(&self.config.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} returned {}", url, status);
            return Err(status_error);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MarketDataError::Transport(e.to_string()))
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl MarketDataPort for AttentionApiClient {
    async fn list_markets(&self) -> Result<Vec<Market>, MarketDataError> {
        self.get_markets().await
    }

    async fn trade_history(&self, query: &MarketQuery) -> Result<Vec<Trade>, MarketDataError> {
        self.get_trades(query).await
    }
}

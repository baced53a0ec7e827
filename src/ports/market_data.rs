//! Market Data Port
//!
//! Trait abstraction over the attention-market API's two read operations.
//! The HTTP adapter implements it; tests use the mock in [`super::mocks`].

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Market, MarketQuery, Trade};

/// Errors from a market data source.
///
/// The `Display` strings are exactly what views show the user: a fixed
/// message per endpoint for non-2xx responses, and the underlying error's
/// description for transport or body failures.
#[derive(Debug, Clone, Error)]
pub enum MarketDataError {
    /// Connect failure, body read failure, or an unparseable 2xx body
    #[error("{0}")]
    Transport(String),

    /// Non-2xx status from the market-listing endpoint
    #[error("Failed to fetch markets")]
    FetchMarkets,

    /// Non-2xx status from the trade-history endpoint
    #[error("Failed to fetch trades")]
    FetchTrades,
}

/// Read access to the attention-market API
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Fetch the full market list
    async fn list_markets(&self) -> Result<Vec<Market>, MarketDataError>;

    /// Fetch the trade history for one market, identified by slug or id.
    /// Order is whatever the backend returned; callers must not re-sort.
    async fn trade_history(&self, query: &MarketQuery) -> Result<Vec<Trade>, MarketDataError>;
}

//! Explorer Service
//!
//! The view-model contract shared by the CLI commands and the interactive
//! viewer: one operation per view. The detail operation fetches the full
//! market list, locates the requested entry client-side, then fetches its
//! trade history as one indivisible phase with a single error outcome.

use thiserror::Error;

use crate::domain::{find_market, Market, MarketQuery, Trade};
use crate::ports::market_data::{MarketDataError, MarketDataPort};

/// Everything the detail view renders
#[derive(Debug, Clone, PartialEq)]
pub struct MarketDetail {
    pub market: Market,
    /// Trade history exactly as returned by the backend, unsorted
    pub trades: Vec<Trade>,
}

/// Errors surfaced to a view. Each collapses to one display string.
#[derive(Debug, Clone, Error)]
pub enum ExplorerError {
    /// The requested slug/id has no matching entry in the fetched list.
    /// A logical error after a successful HTTP response, but displayed the
    /// same way as a transport failure.
    #[error("Market not found")]
    MarketNotFound,

    #[error(transparent)]
    Data(#[from] MarketDataError),
}

/// Read-side application service over a market data source
#[derive(Debug, Clone)]
pub struct ExplorerService<P> {
    source: P,
}

impl<P: MarketDataPort> ExplorerService<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    /// Market overview: one fetch of the full list
    pub async fn market_overview(&self) -> Result<Vec<Market>, ExplorerError> {
        Ok(self.source.list_markets().await?)
    }

    /// Market detail: full-list fetch, client-side match, then trade history.
    /// The trade fetch is parameterized with the same identifier the view was
    /// opened with.
    pub async fn market_detail(&self, query: &MarketQuery) -> Result<MarketDetail, ExplorerError> {
        let markets = self.source.list_markets().await?;

        let market = find_market(&markets, query)
            .cloned()
            .ok_or(ExplorerError::MarketNotFound)?;

        let trades = self.source.trade_history(query).await?;

        Ok(MarketDetail { market, trades })
    }
}

//! Mock Market Data Source
//!
//! Hand-rolled mock implementing [`MarketDataPort`] with scripted responses,
//! for deterministic tests without network access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Market, MarketQuery, Trade};
use crate::ports::market_data::{MarketDataError, MarketDataPort};

/// Mock data source that records calls and serves configured fixtures
#[derive(Debug, Default, Clone)]
pub struct MockMarketData {
    markets: Vec<Market>,
    trades: HashMap<String, Vec<Trade>>,
    fail_markets: bool,
    fail_trades: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a market to the listing response
    pub fn with_market(mut self, market: Market) -> Self {
        self.markets.push(market);
        self
    }

    /// Builder method to set the trade history served for an identifier
    pub fn with_trades(mut self, identifier: &str, trades: Vec<Trade>) -> Self {
        self.trades.insert(identifier.to_string(), trades);
        self
    }

    /// Builder method to make the market listing fail with a non-2xx error
    pub fn failing_markets(mut self) -> Self {
        self.fail_markets = true;
        self
    }

    /// Builder method to make the trade history fail with a non-2xx error
    pub fn failing_trades(mut self) -> Self {
        self.fail_trades = true;
        self
    }

    /// Get all recorded calls ("markets" or "trades/<identifier>")
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataPort for MockMarketData {
    async fn list_markets(&self) -> Result<Vec<Market>, MarketDataError> {
        self.calls.lock().unwrap().push("markets".to_string());
        if self.fail_markets {
            return Err(MarketDataError::FetchMarkets);
        }
        Ok(self.markets.clone())
    }

    async fn trade_history(&self, query: &MarketQuery) -> Result<Vec<Trade>, MarketDataError> {
        let identifier = query.identifier();
        self.calls
            .lock()
            .unwrap()
            .push(format!("trades/{}", identifier));
        if self.fail_trades {
            return Err(MarketDataError::FetchTrades);
        }
        Ok(self.trades.get(&identifier).cloned().unwrap_or_default())
    }
}

//! Trade Entity
//!
//! Read-only projection of a buy/sell execution event as returned by the
//! trade-history endpoint. The `succeeded` flag is only present in one of the
//! backend's response variants, so it is optional here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Uppercase display label
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single trade against a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(rename = "type")]
    pub side: TradeSide,
    /// SOL quantity, displayed with fixed 8-decimal formatting
    pub sol_amount: f64,
    /// Token identifier
    pub token: String,
    /// Token quantity, displayed with fixed 8-decimal formatting
    pub token_amount: f64,
    /// Unix epoch seconds
    pub timestamp: i64,
    /// Transaction identifier, linked to the block explorer
    pub signature: String,
    /// Account address of the trader, abbreviated and linked
    pub signer: String,
    /// Whether the transaction landed; absent in one backend variant
    #[serde(default)]
    pub succeeded: Option<bool>,
}

impl Trade {
    /// Status badge text, when the backend reports the outcome
    pub fn status_label(&self) -> Option<&'static str> {
        self.succeeded
            .map(|ok| if ok { "Succeeded" } else { "Failed" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_labels() {
        assert_eq!(TradeSide::Buy.label(), "BUY");
        assert_eq!(TradeSide::Sell.label(), "SELL");
        assert_eq!(TradeSide::Sell.to_string(), "SELL");
    }

    #[test]
    fn test_deserialize_with_succeeded() {
        let json = r#"{
            "type": "buy",
            "sol_amount": 1.5,
            "token": "ATTN",
            "token_amount": 2.0,
            "timestamp": 1700000000,
            "signature": "sig1",
            "signer": "SSSSTTTTUUUU",
            "succeeded": true
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.side, TradeSide::Buy);
        assert_eq!(trade.succeeded, Some(true));
        assert_eq!(trade.status_label(), Some("Succeeded"));
    }

    #[test]
    fn test_deserialize_without_succeeded() {
        let json = r#"{
            "type": "sell",
            "sol_amount": 0.25,
            "token": "ATTN",
            "token_amount": 10.0,
            "timestamp": 1700000000,
            "signature": "sig2",
            "signer": "SSSSTTTTUUUU"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.side, TradeSide::Sell);
        assert_eq!(trade.succeeded, None);
        assert_eq!(trade.status_label(), None);
    }

    #[test]
    fn test_failed_status_label() {
        let json = r#"{
            "type": "buy",
            "sol_amount": 1.0,
            "token": "ATTN",
            "token_amount": 1.0,
            "timestamp": 1700000000,
            "signature": "sig3",
            "signer": "SSSSTTTTUUUU",
            "succeeded": false
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.status_label(), Some("Failed"));
    }
}

//! Explorer Integration Tests
//!
//! End-to-end tests over the explorer service and formatting helpers:
//! 1. Market overview rendering data (abbreviated addresses, explorer links)
//! 2. Market detail flow (lookup, trade fetch, row formatting)
//! 3. Error collapse (not-found and fetch failures as display strings)
//!
//! All tests are deterministic (no real network calls) and use the mock
//! market data source.

use attention_explorer::application::{ExplorerError, ExplorerService};
use attention_explorer::config::ExplorerSection;
use attention_explorer::domain::{
    abbreviate_address, format_amount, format_sol, format_timestamp, Market, MarketQuery, Trade,
    TradeSide,
};
use attention_explorer::ports::MockMarketData;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Create a mock market for testing
fn create_market(id: u64, slug: &str, address: &str) -> Market {
    Market {
        id,
        slug: slug.to_string(),
        image_url: "i.png".to_string(),
        address: address.to_string(),
    }
}

/// Create a mock trade for testing
fn create_trade(
    side: TradeSide,
    sol_amount: f64,
    token_amount: f64,
    timestamp: i64,
    succeeded: Option<bool>,
) -> Trade {
    Trade {
        side,
        sol_amount,
        token: "ATTN".to_string(),
        token_amount,
        timestamp,
        signature: "sig1sig1sig1".to_string(),
        signer: "SSSSTTTTUUUU".to_string(),
        succeeded,
    }
}

// ============================================================================
// Market Overview
// ============================================================================

#[tokio::test]
async fn overview_renders_one_card_per_market() {
    let mock = MockMarketData::new().with_market(create_market(1, "foo", "AAAABBBBCCCC"));
    let service = ExplorerService::new(mock);

    let markets = service.market_overview().await.unwrap();
    assert_eq!(markets.len(), 1);

    let market = &markets[0];
    assert_eq!(abbreviate_address(&market.address), "AAAA...CCCC");

    let links = ExplorerSection::default();
    assert_eq!(
        links.address_url(&market.address),
        "https://explorer.sonic.game/address/AAAABBBBCCCC?cluster=testnet.v1"
    );
}

#[tokio::test]
async fn overview_empty_list_is_distinct_from_error() {
    let mock = MockMarketData::new();
    let service = ExplorerService::new(mock);

    let markets = service.market_overview().await.unwrap();
    assert!(markets.is_empty());
}

#[tokio::test]
async fn overview_failure_collapses_to_fixed_message() {
    let mock = MockMarketData::new().failing_markets();
    let service = ExplorerService::new(mock);

    let err = service.market_overview().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch markets");
}

// ============================================================================
// Market Detail
// ============================================================================

#[tokio::test]
async fn detail_renders_buy_row_with_status_badge() {
    let timestamp = 1_700_000_000;
    let mock = MockMarketData::new()
        .with_market(create_market(1, "foo", "AAAABBBBCCCC"))
        .with_trades(
            "foo",
            vec![create_trade(TradeSide::Buy, 1.5, 2.0, timestamp, Some(true))],
        );
    let service = ExplorerService::new(mock);

    let detail = service
        .market_detail(&MarketQuery::Slug("foo".to_string()))
        .await
        .unwrap();

    assert_eq!(detail.market.slug, "foo");
    assert_eq!(detail.trades.len(), 1);

    let trade = &detail.trades[0];
    assert_eq!(trade.side.label(), "BUY");
    assert_eq!(format_sol(trade.sol_amount), "1.50000000 SOL");
    assert_eq!(format_amount(trade.token_amount), "2.00000000");
    assert!(!format_timestamp(trade.timestamp).is_empty());
    assert_eq!(abbreviate_address(&trade.signer), "SSSS...UUUU");
    assert_eq!(trade.status_label(), Some("Succeeded"));
}

#[tokio::test]
async fn detail_preserves_backend_trade_order() {
    let mock = MockMarketData::new()
        .with_market(create_market(1, "foo", "AAAABBBBCCCC"))
        .with_trades(
            "foo",
            vec![
                create_trade(TradeSide::Sell, 0.1, 1.0, 300, None),
                create_trade(TradeSide::Buy, 0.2, 2.0, 100, None),
                create_trade(TradeSide::Buy, 0.3, 3.0, 200, None),
            ],
        );
    let service = ExplorerService::new(mock);

    let detail = service
        .market_detail(&MarketQuery::Slug("foo".to_string()))
        .await
        .unwrap();

    let timestamps: Vec<i64> = detail.trades.iter().map(|t| t.timestamp).collect();
    assert_eq!(timestamps, vec![300, 100, 200]);
}

#[tokio::test]
async fn detail_by_id_parameterizes_trade_fetch_with_id() {
    let mock = MockMarketData::new()
        .with_market(create_market(4, "foo", "AAAABBBBCCCC"))
        .with_trades("4", vec![create_trade(TradeSide::Buy, 1.0, 1.0, 100, None)]);
    let service = ExplorerService::new(mock.clone());

    let detail = service.market_detail(&MarketQuery::Id(4)).await.unwrap();
    assert_eq!(detail.trades.len(), 1);
    assert_eq!(mock.calls(), vec!["markets", "trades/4"]);
}

#[tokio::test]
async fn detail_unmatched_slug_is_not_found_not_empty_table() {
    let mock = MockMarketData::new()
        .with_market(create_market(1, "foo", "AAAABBBBCCCC"))
        .with_trades("bar", vec![create_trade(TradeSide::Buy, 1.0, 1.0, 100, None)]);
    let service = ExplorerService::new(mock.clone());

    let err = service
        .market_detail(&MarketQuery::Slug("bar".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, ExplorerError::MarketNotFound));
    assert_eq!(err.to_string(), "Market not found");
    // The trade fetch is never issued for an unmatched identifier
    assert_eq!(mock.calls(), vec!["markets"]);
}

#[tokio::test]
async fn detail_trade_failure_collapses_to_fixed_message() {
    let mock = MockMarketData::new()
        .with_market(create_market(1, "foo", "AAAABBBBCCCC"))
        .failing_trades();
    let service = ExplorerService::new(mock);

    let err = service
        .market_detail(&MarketQuery::Slug("foo".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch trades");
}

#[tokio::test]
async fn detail_tolerates_missing_succeeded_field() {
    let mock = MockMarketData::new()
        .with_market(create_market(1, "foo", "AAAABBBBCCCC"))
        .with_trades(
            "foo",
            vec![create_trade(TradeSide::Sell, 0.5, 4.0, 100, None)],
        );
    let service = ExplorerService::new(mock);

    let detail = service
        .market_detail(&MarketQuery::Slug("foo".to_string()))
        .await
        .unwrap();
    assert_eq!(detail.trades[0].status_label(), None);
}

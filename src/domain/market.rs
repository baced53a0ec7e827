//! Market Entity and Lookup
//!
//! Read-only projection of a market as returned by the attention-market API,
//! plus the identifier matching used to locate one market inside the full list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tradable attention market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Numeric identifier assigned by the backend
    pub id: u64,
    /// Human-readable unique identifier, used in navigation
    pub slug: String,
    /// Hosted image resource for the market
    pub image_url: String,
    /// On-chain account address (opaque string)
    pub address: String,
}

/// Identifier a detail view was opened with: a slug or a numeric id.
///
/// The backend's trade-history endpoint accepts either form, so the same
/// query value is used for the client-side lookup and the trade fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketQuery {
    Slug(String),
    Id(u64),
}

impl MarketQuery {
    /// Whether this query selects the given market
    pub fn matches(&self, market: &Market) -> bool {
        match self {
            MarketQuery::Slug(slug) => market.slug == *slug,
            MarketQuery::Id(id) => market.id == *id,
        }
    }

    /// Path segment for the trade-history endpoint
    pub fn identifier(&self) -> String {
        match self {
            MarketQuery::Slug(slug) => slug.clone(),
            MarketQuery::Id(id) => id.to_string(),
        }
    }
}

impl fmt::Display for MarketQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Locate a market by linear search over the full list.
///
/// The backend exposes no single-market endpoint; detail views fetch the
/// entire list and match client-side.
pub fn find_market<'a>(markets: &'a [Market], query: &MarketQuery) -> Option<&'a Market> {
    markets.iter().find(|m| query.matches(m))
}

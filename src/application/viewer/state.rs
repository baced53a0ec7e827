//! View state for the interactive explorer

use crate::application::service::{ExplorerError, MarketDetail};
use crate::domain::{Market, MarketQuery};

/// Which view is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Market list
    Markets,
    /// Market detail, opened with the identifier the user navigated by
    Detail(MarketQuery),
}

/// Per-view transient state: a fetch is outstanding, failed, or settled
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Settled value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Error message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of a background fetch, tagged with the navigation generation that
/// issued it. Stale generations are discarded on receipt.
#[derive(Debug)]
pub enum FetchOutcome {
    Markets {
        generation: u64,
        result: Result<Vec<Market>, ExplorerError>,
    },
    Detail {
        generation: u64,
        result: Result<MarketDetail, ExplorerError>,
    },
}

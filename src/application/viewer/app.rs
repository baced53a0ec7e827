//! Application state and navigation logic for the interactive explorer
//!
//! Each navigation bumps a generation counter and spawns one fetch on the
//! async runtime. Fetch results come back over a channel tagged with the
//! generation they were issued for; results from a superseded navigation are
//! discarded, so a late response can never overwrite a newer view's state.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::application::service::{ExplorerService, MarketDetail};
use crate::config::ExplorerSection;
use crate::domain::{Market, MarketQuery};
use crate::ports::market_data::MarketDataPort;

use super::state::{FetchOutcome, Route, ViewState};

/// Main application state for the explorer UI
pub struct App<P: MarketDataPort + 'static> {
    service: Arc<ExplorerService<P>>,
    runtime: Handle,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
    /// Bumped on every navigation; outcomes carrying an older value are stale
    generation: u64,
    /// Block-explorer link templates for the detail view
    pub links: ExplorerSection,
    /// Current view
    pub route: Route,
    /// Market list state
    pub markets: ViewState<Vec<Market>>,
    /// Market detail state
    pub detail: ViewState<MarketDetail>,
    /// Selected row in the market list
    pub selected: usize,
    /// Whether to quit
    pub should_quit: bool,
}

impl<P: MarketDataPort + 'static> App<P> {
    pub fn new(runtime: Handle, service: Arc<ExplorerService<P>>, links: ExplorerSection) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            service,
            runtime,
            tx,
            rx,
            generation: 0,
            links,
            route: Route::Markets,
            markets: ViewState::Loading,
            detail: ViewState::Loading,
            selected: 0,
            should_quit: false,
        }
    }

    /// Current navigation generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter the market list and fetch it. Re-entering always re-fetches;
    /// nothing is cached across views.
    pub fn open_markets(&mut self) {
        self.route = Route::Markets;
        self.markets = ViewState::Loading;
        let generation = self.bump();

        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = service.market_overview().await;
            let _ = tx.send(FetchOutcome::Markets { generation, result });
        });
    }

    /// Enter the detail view for one market and fetch lookup + trade history
    pub fn open_detail(&mut self, query: MarketQuery) {
        self.route = Route::Detail(query.clone());
        self.detail = ViewState::Loading;
        let generation = self.bump();

        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = service.market_detail(&query).await;
            let _ = tx.send(FetchOutcome::Detail { generation, result });
        });
    }

    /// Re-fetch the current view
    pub fn refresh(&mut self) {
        match self.route.clone() {
            Route::Markets => self.open_markets(),
            Route::Detail(query) => self.open_detail(query),
        }
    }

    /// Open the detail view for the selected market, navigating by slug
    pub fn open_selected(&mut self) {
        if self.route != Route::Markets {
            return;
        }
        let slug = match self.markets.value() {
            Some(markets) => markets.get(self.selected).map(|m| m.slug.clone()),
            None => None,
        };
        if let Some(slug) = slug {
            self.open_detail(MarketQuery::Slug(slug));
        }
    }

    /// Leave the detail view back to the market list
    pub fn back(&mut self) {
        if matches!(self.route, Route::Detail(_)) {
            self.open_markets();
        }
    }

    /// Move the market list selection down
    pub fn select_next(&mut self) {
        if let Some(markets) = self.markets.value() {
            if self.selected + 1 < markets.len() {
                self.selected += 1;
            }
        }
    }

    /// Move the market list selection up
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Drain the fetch channel and apply settled outcomes
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome);
        }
    }

    /// Apply one fetch outcome, discarding it if a newer navigation
    /// superseded the generation it was issued for
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Markets { generation, result } => {
                if generation != self.generation {
                    tracing::debug!("discarding stale markets response (generation {})", generation);
                    return;
                }
                self.markets = match result {
                    Ok(markets) => {
                        if self.selected >= markets.len() {
                            self.selected = markets.len().saturating_sub(1);
                        }
                        ViewState::Ready(markets)
                    }
                    Err(e) => ViewState::Failed(e.to_string()),
                };
            }
            FetchOutcome::Detail { generation, result } => {
                if generation != self.generation {
                    tracing::debug!("discarding stale detail response (generation {})", generation);
                    return;
                }
                self.detail = match result {
                    Ok(detail) => ViewState::Ready(detail),
                    Err(e) => ViewState::Failed(e.to_string()),
                };
            }
        }
    }

    fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::service::ExplorerError;
    use crate::ports::MockMarketData;

    fn market(id: u64, slug: &str) -> Market {
        Market {
            id,
            slug: slug.to_string(),
            image_url: "i.png".to_string(),
            address: "AAAABBBBCCCC".to_string(),
        }
    }

    fn test_app() -> App<MockMarketData> {
        let service = Arc::new(ExplorerService::new(MockMarketData::new()));
        App::new(Handle::current(), service, ExplorerSection::default())
    }

    #[tokio::test]
    async fn test_open_markets_sets_loading() {
        let mut app = test_app();
        app.open_markets();
        assert_eq!(app.route, Route::Markets);
        assert!(app.markets.is_loading());
        assert_eq!(app.generation(), 1);
    }

    #[tokio::test]
    async fn test_apply_current_generation() {
        let mut app = test_app();
        app.open_markets();

        app.apply(FetchOutcome::Markets {
            generation: app.generation(),
            result: Ok(vec![market(1, "foo")]),
        });

        assert_eq!(app.markets.value().map(|m| m.len()), Some(1));
    }

    #[tokio::test]
    async fn test_stale_outcome_is_discarded() {
        let mut app = test_app();
        app.open_markets();
        let stale = app.generation();

        // Navigating to a detail view supersedes the markets fetch
        app.open_detail(MarketQuery::Slug("foo".to_string()));
        assert!(app.detail.is_loading());

        app.apply(FetchOutcome::Markets {
            generation: stale,
            result: Ok(vec![market(1, "foo")]),
        });

        // The late list response must not have been applied
        assert!(app.markets.is_loading());
    }

    #[tokio::test]
    async fn test_stale_detail_after_back_is_discarded() {
        let mut app = test_app();
        app.open_detail(MarketQuery::Slug("foo".to_string()));
        let stale = app.generation();
        app.back();

        app.apply(FetchOutcome::Detail {
            generation: stale,
            result: Err(ExplorerError::MarketNotFound),
        });

        assert_eq!(app.route, Route::Markets);
        // The superseded detail error never reaches the view state
        assert!(app.detail.is_loading());
    }

    #[tokio::test]
    async fn test_error_collapses_to_display_string() {
        let mut app = test_app();
        app.open_detail(MarketQuery::Id(9));

        app.apply(FetchOutcome::Detail {
            generation: app.generation(),
            result: Err(ExplorerError::MarketNotFound),
        });

        assert_eq!(app.detail.error(), Some("Market not found"));
    }

    #[tokio::test]
    async fn test_selection_moves_and_clamps() {
        let mut app = test_app();
        app.open_markets();
        app.apply(FetchOutcome::Markets {
            generation: app.generation(),
            result: Ok(vec![market(1, "foo"), market(2, "bar")]),
        });

        app.select_next();
        assert_eq!(app.selected, 1);
        app.select_next();
        assert_eq!(app.selected, 1);
        app.select_prev();
        assert_eq!(app.selected, 0);
        app.select_prev();
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn test_open_selected_navigates_by_slug() {
        let mut app = test_app();
        app.open_markets();
        app.apply(FetchOutcome::Markets {
            generation: app.generation(),
            result: Ok(vec![market(1, "foo"), market(2, "bar")]),
        });

        app.select_next();
        app.open_selected();

        assert_eq!(app.route, Route::Detail(MarketQuery::Slug("bar".to_string())));
        assert!(app.detail.is_loading());
    }

    #[tokio::test]
    async fn test_selection_clamped_when_list_shrinks() {
        let mut app = test_app();
        app.open_markets();
        app.apply(FetchOutcome::Markets {
            generation: app.generation(),
            result: Ok(vec![market(1, "foo"), market(2, "bar")]),
        });
        app.select_next();

        app.refresh();
        app.apply(FetchOutcome::Markets {
            generation: app.generation(),
            result: Ok(vec![market(1, "foo")]),
        });

        assert_eq!(app.selected, 0);
    }
}

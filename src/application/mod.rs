//! Application Layer - View-model service and interactive UI
//!
//! `service` implements the one-operation-per-view contract shared by the
//! CLI commands and the interactive viewer; `viewer` is the terminal UI.

pub mod service;
pub mod viewer;

pub use service::{ExplorerError, ExplorerService, MarketDetail};

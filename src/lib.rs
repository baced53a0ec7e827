//! Attention Explorer - Terminal explorer for Sonic attention markets
//!
//! Lists attention markets and displays per-market trading history fetched
//! from the attention-market HTTP API.
//!
//! # Modules
//!
//! - `domain`: Market/Trade entities, lookup and display formatting
//! - `ports`: Trait abstraction over the attention-market API (plus mock)
//! - `adapters`: External implementations (HTTP API client, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Explorer service and the interactive terminal UI

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

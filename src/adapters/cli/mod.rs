//! CLI Adapter
//!
//! Command-line interface for the attention-market explorer.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, Command, ExploreCmd, MarketsCmd, TradesCmd};

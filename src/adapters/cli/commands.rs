//! CLI Command Definitions
//!
//! Argument structures for the explorer's subcommands. Handlers live in
//! `main.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Attention Explorer - browse Sonic attention markets from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "attention-explorer",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Terminal explorer for Sonic attention markets",
    long_about = "Lists attention markets and displays per-market trading history \
                  fetched from the attention-market API, as one-shot tables or an \
                  interactive terminal UI."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all attention markets
    Markets(MarketsCmd),

    /// Show the trade history for one market
    Trades(TradesCmd),

    /// Launch the interactive explorer UI
    Explore(ExploreCmd),
}

/// List all attention markets
#[derive(Parser, Debug)]
pub struct MarketsCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/explorer.toml")]
    pub config: PathBuf,
}

/// Show the trade history for one market
#[derive(Parser, Debug)]
pub struct TradesCmd {
    /// Market slug, or numeric id with --id
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Look the market up by numeric id instead of slug
    #[arg(long)]
    pub id: bool,

    /// Show relative times ("5 mins ago") instead of absolute dates
    #[arg(long)]
    pub relative: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/explorer.toml")]
    pub config: PathBuf,
}

/// Launch the interactive explorer UI
#[derive(Parser, Debug)]
pub struct ExploreCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/explorer.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markets() {
        let args = vec!["attention-explorer", "markets"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Markets(cmd) => {
                assert_eq!(cmd.config, PathBuf::from("config/explorer.toml"));
            }
            _ => panic!("Expected Markets command"),
        }
    }

    #[test]
    fn test_parse_trades_by_slug() {
        let args = vec!["attention-explorer", "trades", "foo"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Trades(cmd) => {
                assert_eq!(cmd.identifier, "foo");
                assert!(!cmd.id);
                assert!(!cmd.relative);
            }
            _ => panic!("Expected Trades command"),
        }
    }

    #[test]
    fn test_parse_trades_by_id_relative() {
        let args = vec!["attention-explorer", "trades", "3", "--id", "--relative"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Trades(cmd) => {
                assert_eq!(cmd.identifier, "3");
                assert!(cmd.id);
                assert!(cmd.relative);
            }
            _ => panic!("Expected Trades command"),
        }
    }

    #[test]
    fn test_parse_explore_with_config() {
        let args = vec!["attention-explorer", "explore", "--config", "test.toml"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Explore(cmd) => {
                assert_eq!(cmd.config, PathBuf::from("test.toml"));
            }
            _ => panic!("Expected Explore command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = vec!["attention-explorer", "-v", "--debug", "markets"];
        let app = CliApp::try_parse_from(args).unwrap();

        assert!(app.verbose);
        assert!(app.debug);
    }
}

//! Attention Explorer - Terminal explorer for Sonic attention markets
//!
//! Lists attention markets and displays per-market trading history fetched
//! from the attention-market API.

mod adapters;
mod application;
mod config;
mod domain;
mod ports;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::api::AttentionApiClient;
use crate::adapters::cli::{CliApp, Command, ExploreCmd, MarketsCmd, TradesCmd};
use crate::application::service::ExplorerService;
use crate::application::viewer;
use crate::config::{load_or_default, Config};
use crate::domain::{
    abbreviate_address, format_amount, format_sol, format_timestamp, relative_time_from_now,
    MarketQuery,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (ATTENTION_API_BASE_URL can live there)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    let interactive = matches!(app.command, Command::Explore(_));
    init_logging(app.verbose, app.debug, interactive);

    match app.command {
        Command::Markets(cmd) => markets_command(cmd).await,
        Command::Trades(cmd) => trades_command(cmd).await,
        Command::Explore(cmd) => explore_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool, interactive: bool) {
    // The interactive viewer owns the alternate screen; log lines there
    // would corrupt the display.
    if interactive {
        return;
    }

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn build_service(config: &Config) -> Result<ExplorerService<AttentionApiClient>> {
    let client =
        AttentionApiClient::from_app_config(config).context("Failed to create API client")?;
    Ok(ExplorerService::new(client))
}

/// Handle markets command: print the market overview table
async fn markets_command(cmd: MarketsCmd) -> Result<()> {
    let config = load_or_default(&cmd.config).context("Failed to load configuration")?;
    let service = build_service(&config)?;

    tracing::info!("Fetching markets from {}", config.api.resolved_base_url());
    let markets = service.market_overview().await?;

    if markets.is_empty() {
        println!("No markets available");
        return Ok(());
    }

    println!("{:<24} {:>6}  {:<13} {}", "SLUG", "ID", "ADDRESS", "EXPLORER");
    for market in &markets {
        println!(
            "{:<24} {:>6}  {:<13} {}",
            market.slug,
            market.id,
            abbreviate_address(&market.address),
            config.explorer.address_url(&market.address)
        );
    }

    Ok(())
}

/// Handle trades command: print one market's header and trade history
async fn trades_command(cmd: TradesCmd) -> Result<()> {
    let config = load_or_default(&cmd.config).context("Failed to load configuration")?;
    let service = build_service(&config)?;

    let query = if cmd.id {
        let id: u64 = cmd
            .identifier
            .parse()
            .context("--id requires a numeric identifier")?;
        MarketQuery::Id(id)
    } else {
        MarketQuery::Slug(cmd.identifier.clone())
    };

    tracing::info!("Fetching market detail for {}", query);
    let detail = service.market_detail(&query).await?;
    let market = &detail.market;

    println!("{} (id {})", market.slug, market.id);
    println!(
        "{}  {}",
        abbreviate_address(&market.address),
        config.explorer.address_url(&market.address)
    );
    println!();

    if detail.trades.is_empty() {
        println!("No trades found for this market.");
        return Ok(());
    }

    let has_status = detail.trades.iter().any(|t| t.succeeded.is_some());
    let time_header = if cmd.relative { "TIME" } else { "DATE" };

    let mut header = format!(
        "{:<5} {:>16} {:>14}  {:<20} {:<13}",
        "TYPE", "SOL AMOUNT", "TOKEN AMOUNT", time_header, "SIGNER"
    );
    if has_status {
        header.push_str(&format!(" {:<10}", "STATUS"));
    }
    header.push_str(" TX");
    println!("{}", header);

    for trade in &detail.trades {
        let time = if cmd.relative {
            relative_time_from_now(trade.timestamp)
        } else {
            format_timestamp(trade.timestamp)
        };

        let mut line = format!(
            "{:<5} {:>16} {:>14}  {:<20} {:<13}",
            trade.side.label(),
            format_sol(trade.sol_amount),
            format_amount(trade.token_amount),
            time,
            abbreviate_address(&trade.signer),
        );
        if has_status {
            line.push_str(&format!(" {:<10}", trade.status_label().unwrap_or("-")));
        }
        line.push_str(&format!(" {}", config.explorer.tx_url(&trade.signature)));
        println!("{}", line);
    }

    Ok(())
}

/// Handle explore command: launch the interactive viewer
async fn explore_command(cmd: ExploreCmd) -> Result<()> {
    let config = load_or_default(&cmd.config).context("Failed to load configuration")?;
    let service = Arc::new(build_service(&config)?);
    let links = config.explorer.clone();

    let handle = tokio::runtime::Handle::current();
    // The viewer loop blocks this task while fetches run on worker threads
    tokio::task::block_in_place(move || viewer::run(handle, service, links))
}

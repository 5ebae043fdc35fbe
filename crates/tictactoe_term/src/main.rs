//! Tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_term::{Cli, TermConfig, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TermConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let fallback = cli
        .log_filter
        .clone()
        .unwrap_or_else(|| config.log_filter().clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(json = cli.json, "Starting tic-tac-toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let _stdout = run(stdin.lock(), stdout.lock(), config, cli.json)
        .context("Terminal session failed")?;

    info!("Session ended");
    Ok(())
}

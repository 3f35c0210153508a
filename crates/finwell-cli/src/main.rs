//! Finwell CLI - Household financial-health scorer
//!
//! Usage:
//!   finwell score --file profile.json    Score a profile and render its chart
//!   finwell serve --port 3000            Start the scoring API server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Score { file, graph, json } => commands::cmd_score(&file, &graph, json),
        Commands::Serve { port, host } => commands::cmd_serve(&host, port).await,
    }
}

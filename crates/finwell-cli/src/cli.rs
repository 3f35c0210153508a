//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Finwell - Household financial-health scoring
#[derive(Parser)]
#[command(name = "finwell")]
#[command(about = "Financial-health scorer with spending charts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a profile JSON file and render its spending chart
    Score {
        /// Profile JSON file to score
        #[arg(short, long)]
        file: PathBuf,

        /// Output path for the rendered chart
        #[arg(short, long, default_value = "spending_distribution.png")]
        graph: PathBuf,

        /// Print the breakdown as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Start the scoring API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

//! JourneyX CLI - Contextual travel insights
//!
//! Usage:
//!   journeyx assistant --city Tokyo      Today's insights for a destination
//!   journeyx transport --city "New York" Compare journey options
//!   journeyx safety                      Regional safety advisories
//!   journeyx evaluate --file trip.json   Evaluate a condition document
//!   journeyx cities                      List bundled destinations

mod cli;
mod commands;
mod data;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
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
        Commands::Assistant { city, tags } => commands::cmd_assistant(&city, &tags, cli.json),
        Commands::Transport { from, to, city } => {
            commands::cmd_transport(&from, &to, &city, cli.json)
        }
        Commands::Safety => commands::cmd_safety(cli.json),
        Commands::Evaluate { file } => commands::cmd_evaluate(&file, cli.json),
        Commands::Cities => commands::cmd_cities(),
    }
}

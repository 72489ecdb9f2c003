//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// JourneyX - Contextual travel insights
#[derive(Parser)]
#[command(name = "journeyx")]
#[command(about = "Rule-based travel insight engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's insights and confidence banner for a destination
    Assistant {
        /// Destination city (see `journeyx cities`)
        #[arg(short, long, default_value = "Paris")]
        city: String,

        /// Extra destination tags, comma separated (e.g., "beach,hiddengem")
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Compare journey options and show the best pick
    Transport {
        /// Journey origin label
        #[arg(long, default_value = "New York")]
        from: String,

        /// Journey destination label
        #[arg(long, default_value = "Boston")]
        to: String,

        /// Bundled city whose weather shapes the pick
        #[arg(short, long, default_value = "New York")]
        city: String,
    },

    /// Show regional safety advisories
    Safety,

    /// Evaluate a JSON condition document
    Evaluate {
        /// Path to the conditions file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List bundled destinations
    Cities,
}

//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dealer_types::OutputFormat;

#[derive(Parser)]
#[command(name = "dealership")]
#[command(version)]
#[command(about = "Vehicle lot inventory built from intake forms")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the lot from an intake file and print the inventory report
    Report {
        /// Path to the intake file (CSV or JSON)
        forms: PathBuf,

        /// Print only the per-kind counts, without the model listing
        #[arg(long)]
        kind_counts_only: bool,
    },

    /// Count the vehicles of one kind
    Count {
        /// Path to the intake file (CSV or JSON)
        forms: PathBuf,

        /// Kind name to count, matched exactly (e.g. "Car")
        kind: String,
    },

    /// List model names in intake order
    Models {
        /// Path to the intake file (CSV or JSON)
        forms: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,
    },
}

//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Olist - E-commerce dataset analytics dashboard
#[derive(Parser)]
#[command(name = "olist")]
#[command(about = "Terminal dashboard over the Olist e-commerce dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the six dataset CSV files
    ///
    /// Overrides OLIST_DATA_DIR and the data_dir from the config file.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.local/share/olist/config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick insights from an interactive menu
    Menu,

    /// Show a single insight
    Show {
        /// Insight number (1-10) or name, e.g. 3 or total_revenue
        insight: String,
    },

    /// Show all ten insights one after another
    Dashboard,

    /// List the available insights
    List,

    /// Show resolved dataset paths and table sizes
    Status,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable charts and tables
    Text,
    /// Pretty-printed JSON
    Json,
}

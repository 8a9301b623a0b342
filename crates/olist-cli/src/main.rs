//! Olist CLI - E-commerce dataset analytics dashboard
//!
//! Usage:
//!   olist                     Interactive insight menu
//!   olist show 3              Show one insight (1-10)
//!   olist dashboard           Show all insights
//!   olist status              Dataset paths and row counts

mod cli;
mod commands;
mod render;


use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr).compact())
        .init();

    run(cli, io::stdin().lock(), &mut io::stdout().lock())
}

/// Dispatch a parsed command. Only commands that read the dataset resolve
/// the dataset config.
fn run<R: BufRead, W: Write>(cli: Cli, input: R, out: &mut W) -> Result<()> {
    let config = || commands::resolve_config(cli.config.as_deref(), cli.data_dir.as_deref());

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::List => commands::cmd_list(out, cli.format),
        Commands::Status => commands::cmd_status(out, &config()?),
        Commands::Show { insight } => {
            let id = commands::parse_insight(&insight)?;
            let dataset = commands::load_dataset(&config()?)?;
            commands::cmd_show(out, &dataset, id, cli.format)
        }
        Commands::Dashboard => {
            let dataset = commands::load_dataset(&config()?)?;
            commands::cmd_dashboard(out, &dataset, cli.format)
        }
        Commands::Menu => {
            let dataset = commands::load_dataset(&config()?)?;
            commands::cmd_menu(input, out, &dataset, cli.format)
        }
    }
}

// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Plan { have, label, json }) => commands::plan(have, &label, json),
        Some(Commands::Catalog) => commands::catalog(),
        // Bare `pantry` evaluates the builtin data, like the original script
        None => commands::plan(None, "pantry", false),
    }
}

// src/cli.rs
//! CLI definitions for the pantry evaluator
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(version)]
#[command(about = "Evaluate which recipes a pantry can make and who goes hungry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate the catalog against a pantry and the party's preferences
    Plan {
        /// Comma-separated raw ingredients on hand (default: the builtin pantry)
        #[arg(long, value_delimiter = ',')]
        have: Option<Vec<String>>,

        /// Label printed in the report header
        #[arg(long, default_value = "pantry")]
        label: String,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the recipe catalog and each recipe's required ingredients
    Catalog,
}

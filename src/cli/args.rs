//! CLI argument definitions using clap
//!
//! Commands:
//! - inventory serve [--config <path>] [overrides]
//! - inventory init-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// Inventory - a product inventory HTTP service
#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (default: ./inventory.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(long, conflicts_with = "in_memory")]
        database: Option<PathBuf>,

        /// Keep products in memory only
        #[arg(long)]
        in_memory: bool,

        /// Log output format
        #[arg(long, value_enum)]
        log_format: Option<LogFormat>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./inventory.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! CLI module for the inventory service
//!
//! Provides command-line interface for:
//! - serve: Load configuration and run the HTTP server
//! - init-config: Write a default configuration file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init_config, open_repository, run, run_command, serve, ServeOverrides};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};

//! CLI module for campus
//!
//! Provides command-line interface for:
//! - init: Write a default configuration and bootstrap the tables
//! - serve: Start the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};

//! CLI argument definitions using clap
//!
//! Commands:
//! - campus init --config <path>
//! - campus serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// campus - REST API for students, teachers and subjects
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration and create the database tables
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./campus.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./campus.json")]
        config: PathBuf,

        /// Port to listen on, overriding the config file and PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

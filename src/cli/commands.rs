//! CLI command implementations
//!
//! `init` writes a default config and bootstraps the tables; `serve` loads
//! the config, connects to the store and runs the HTTP server until ctrl-c.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{self, Event};
use crate::store::{DatabaseConfig, Store};

use super::args::Command;
use super::errors::{CliError, CliResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Store connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log level used when RUST_LOG is unset (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            database: DatabaseConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Apply `PORT` and `DATABASE_URL` overrides.
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid PORT: '{}'", port)))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        self.validate()
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.database.url.trim().is_empty() {
            return Err(CliError::config_error("database.url must not be empty"));
        }

        if self.database.max_connections == 0 {
            return Err(CliError::config_error("database.max_connections must be > 0"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of {}.",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let _ = dotenv::dotenv();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

fn load_effective(config_path: &Path) -> CliResult<Config> {
    let mut config = Config::load(config_path)?;
    config.apply_env(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Write a default config and create the tables it points at
pub fn init(config_path: &Path) -> CliResult<()> {
    init_with(config_path, &Config::default())
}

fn init_with(config_path: &Path, initial: &Config) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display()));
    }

    fs::write(config_path, serde_json::to_string_pretty(initial)?)?;

    let config = load_effective(config_path)?;
    observability::init_logging(&config.log_level);
    tracing::info!(event = %Event::ConfigLoaded, path = %config_path.display());

    runtime()?.block_on(async {
        let store = Store::connect(&config.database).await?;
        store.bootstrap_schema().await?;
        tracing::info!(event = %Event::SchemaReady, url = %config.database.url);
        store.close().await;
        Ok::<_, CliError>(())
    })
}

/// Start the HTTP server
///
/// 1. Load config and apply environment overrides
/// 2. Connect the pool and bootstrap the tables
/// 3. Serve until ctrl-c
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    if !config_path.exists() {
        return Err(CliError::not_initialized(config_path.display()));
    }

    let mut config = load_effective(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    observability::init_logging(&config.log_level);
    observability::log_event(Event::BootStart);
    tracing::info!(event = %Event::ConfigLoaded, path = %config_path.display());

    runtime()?.block_on(async {
        let store = Store::connect(&config.database).await?;
        store.bootstrap_schema().await?;
        tracing::info!(event = %Event::SchemaReady, url = %config.database.url);

        let server = HttpServer::with_config(config.http.clone(), store.clone());
        let served = server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

        store.close().await;
        served
    })
}

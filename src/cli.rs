//! Command-line interface parsing for the Pokedex CLI
//!
//! This module turns command-line flags into the settings the client, the
//! cache reaper, and the logger start with.

use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::data::{ClientConfig, DEFAULT_BASE_URL};

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// A duration flag was set to zero
    #[error("Invalid value for --{0}: must be greater than zero")]
    ZeroDuration(&'static str),

    /// The base URL is not an absolute http(s) URL
    #[error("Invalid base URL: '{0}'. Expected an absolute http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// The log level is not one of trace, debug, info, warn, error
    #[error("Invalid log level: '{0}'. Valid levels: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Pokedex CLI - Browse the PokeAPI catalog from an interactive prompt
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse PokeAPI location areas and pokemon from an interactive prompt")]
#[command(version)]
pub struct Cli {
    /// Root of the REST API (override to point at a mock server)
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds before a request is abandoned
    #[arg(long, value_name = "SECONDS", default_value_t = 5)]
    pub timeout_secs: u64,

    /// Seconds a cached response is kept; also the sweep interval
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    pub cache_interval_secs: u64,

    /// Log verbosity written to stderr (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Settings derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Client connection settings
    pub client: ClientConfig,
    /// Cache expiry and sweep interval
    pub cache_interval: Duration,
    /// Default log level
    pub log_level: tracing::Level,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            cache_interval: Duration::from_secs(300),
            log_level: tracing::Level::WARN,
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with validated settings
    /// * `Err(CliError)` if a duration is zero, the base URL is not http(s),
    ///   or the log level is unknown
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.timeout_secs == 0 {
            return Err(CliError::ZeroDuration("timeout-secs"));
        }
        if cli.cache_interval_secs == 0 {
            return Err(CliError::ZeroDuration("cache-interval-secs"));
        }

        let base_url = parse_base_url(&cli.base_url)?;
        let log_level = cli
            .log_level
            .parse::<tracing::Level>()
            .map_err(|_| CliError::InvalidLogLevel(cli.log_level.clone()))?;

        Ok(StartupConfig {
            client: ClientConfig {
                base_url,
                timeout: Duration::from_secs(cli.timeout_secs),
            },
            cache_interval: Duration::from_secs(cli.cache_interval_secs),
            log_level,
        })
    }
}

/// Checks that `raw` is an absolute http(s) URL and strips any trailing slash
pub fn parse_base_url(raw: &str) -> Result<String, CliError> {
    let url = Url::parse(raw).map_err(|_| CliError::InvalidBaseUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        _ => Err(CliError::InvalidBaseUrl(raw.to_string())),
    }
}

//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap: an optional city
//! to open on, the nearby-city count, and the OpenWeatherMap API key with an
//! environment-variable fallback.

use clap::Parser;
use thiserror::Error;

/// Environment variable consulted when --api-key is not given
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither --api-key nor the environment variable provided a key
    #[error("no API key provided; pass --api-key or set {API_KEY_ENV}")]
    MissingApiKey,
}

/// Skycast - OpenWeatherMap forecasts in your terminal
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Terminal weather dashboard with hourly, five-day and nearby-city views")]
#[command(version)]
pub struct Cli {
    /// City to open on startup; falls back to the saved favorite city
    pub city: Option<String>,

    /// Number of nearby cities to show
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    pub nearby: u8,

    /// OpenWeatherMap API key; falls back to the OPENWEATHER_API_KEY
    /// environment variable
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// City requested on the command line, if any
    pub city: Option<String>,
    /// Number of nearby cities to fetch
    pub nearby_count: u8,
    /// Resolved API key
    pub api_key: String,
}

impl StartupConfig {
    /// Builds a StartupConfig from parsed CLI arguments.
    ///
    /// The API key comes from --api-key when given, otherwise from the
    /// OPENWEATHER_API_KEY environment variable.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the resolved settings
    /// * `Err(CliError::MissingApiKey)` if no key is available
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let api_key = cli
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or(CliError::MissingApiKey)?;

        Ok(StartupConfig {
            city: cli.city.clone(),
            nearby_count: cli.nearby,
            api_key,
        })
    }
}

//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use tracing::debug;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub dtod: DtodConfig,
    #[serde(default)]
    pub here: HereConfig,
    #[serde(default)]
    pub bing: BingConfig,
    #[serde(default)]
    pub recalculation: RecalculationConfig,
}

/// Database configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

/// Which distance planner the rate engine is wired with
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlannerKind {
    /// Composite HHG policy (DTOD + ZIP3 distance table)
    #[default]
    Hhg,
    /// DTOD SOAP service only
    Dtod,
    /// HERE routing and geocoding
    Here,
    /// Bing truck routes
    Bing,
    /// Deterministic mock distances (local development)
    Mock,
}

/// Planner selection
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    #[serde(default)]
    pub kind: PlannerKind,
}

/// DTOD SOAP service configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DtodConfig {
    /// SOAP endpoint URL
    #[serde(default = "default_dtod_url")]
    pub url: String,

    pub username: Option<String>,

    pub password: Option<String>,

    /// Return a zero distance instead of failing when DTOD reports no distance
    #[serde(default)]
    pub simulate_outage: bool,

    /// Request timeout in seconds
    #[serde(default = "default_dtod_timeout")]
    pub timeout_secs: u64,
}

fn default_dtod_url() -> String {
    "https://dtod.sddc.army.mil/service/DistanceService.asmx".to_string()
}

fn default_dtod_timeout() -> u64 {
    30
}

impl Default for DtodConfig {
    fn default() -> Self {
        Self {
            url: default_dtod_url(),
            username: None,
            password: None,
            simulate_outage: false,
            timeout_secs: default_dtod_timeout(),
        }
    }
}

/// HERE routing/geocoding configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HereConfig {
    #[serde(default = "default_here_geocode")]
    pub geocode_endpoint: String,

    #[serde(default = "default_here_route")]
    pub route_endpoint: String,

    pub app_id: Option<String>,

    pub app_code: Option<String>,

    #[serde(default = "default_here_timeout")]
    pub timeout_secs: u64,
}

fn default_here_geocode() -> String {
    "https://geocoder.api.here.com/6.2/geocode.json".to_string()
}

fn default_here_route() -> String {
    "https://route.api.here.com/routing/7.2/calculateroute.json".to_string()
}

fn default_here_timeout() -> u64 {
    15
}

impl Default for HereConfig {
    fn default() -> Self {
        Self {
            geocode_endpoint: default_here_geocode(),
            route_endpoint: default_here_route(),
            app_id: None,
            app_code: None,
            timeout_secs: default_here_timeout(),
        }
    }
}

/// Bing truck routing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BingConfig {
    #[serde(default = "default_bing_endpoint")]
    pub endpoint: String,

    pub api_key: Option<String>,

    #[serde(default = "default_bing_timeout")]
    pub timeout_secs: u64,
}

fn default_bing_endpoint() -> String {
    "https://dev.virtualearth.net/REST/v1/Routes/Truck".to_string()
}

fn default_bing_timeout() -> u64 {
    30
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_bing_endpoint(),
            api_key: None,
            timeout_secs: default_bing_timeout(),
        }
    }
}

/// Recalculation sweep configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RecalculationConfig {
    /// Maximum shipments examined per sweep
    #[serde(default = "default_batch_limit")]
    pub batch_limit: i64,
}

fn default_batch_limit() -> i64 {
    500
}

impl Default for RecalculationConfig {
    fn default() -> Self {
        Self {
            batch_limit: default_batch_limit(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        debug!("Loading configuration for run mode {}", run_mode);

        let config = Config::builder()
            // Start with default values
            .set_default("database.max_connections", 10)?
            .set_default("planner.kind", "hhg")?
            .set_default("dtod.simulate_outage", false)?
            .set_default("dtod.timeout_secs", 30)?
            .set_default("here.timeout_secs", 15)?
            .set_default("bing.timeout_secs", 30)?
            .set_default("recalculation.batch_limit", 500)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with MOVECOST_ prefix
            .add_source(
                Environment::with_prefix("MOVECOST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("MOVECOST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

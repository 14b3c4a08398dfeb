//! Configuration management for the Krishi Advisor platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with KRISHI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Geocoding service configuration
    pub geocoding: GeocodingConfig,

    /// Weather/climate service configuration
    pub weather: WeatherConfig,

    /// Mandi price dataset configuration
    pub market: MarketConfig,

    /// Reference table overrides
    #[serde(default)]
    pub reference: ReferenceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// Geocoding API base URL
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Base URL for current conditions
    pub forecast_base_url: String,

    /// Base URL for daily history
    pub archive_base_url: String,

    /// Timezone the daily arrays are aligned to
    pub timezone: String,

    /// Trailing window of daily observations summarised per analysis
    pub history_days: u32,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarketConfig {
    /// data.gov.in resource host
    pub base_url: String,

    /// Dataset identifier of the daily mandi prices
    pub resource_id: String,

    /// data.gov.in API key
    pub api_key: String,

    /// Records requested per page
    pub page_size: u32,

    /// Upper bound on pages fetched per lookup
    pub max_pages: u32,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReferenceConfig {
    /// CSV file replacing the bundled crop requirements table
    pub crop_table_path: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("KRISHI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8080)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("geocoding.base_url", "https://geocoding-api.open-meteo.com/v1")?
            .set_default("geocoding.timeout_secs", 15)?
            .set_default("weather.forecast_base_url", "https://api.open-meteo.com/v1")?
            .set_default("weather.archive_base_url", "https://archive-api.open-meteo.com/v1")?
            .set_default("weather.timezone", "Asia/Kolkata")?
            .set_default("weather.history_days", i64::from(shared::DEFAULT_HISTORY_DAYS))?
            .set_default("weather.timeout_secs", 30)?
            .set_default("market.base_url", "https://api.data.gov.in/resource")?
            .set_default("market.resource_id", "35985678-0d79-46b4-9ed6-6f13308a1d24")?
            .set_default("market.api_key", "")?
            .set_default("market.page_size", 10)?
            .set_default("market.max_pages", 50)?
            .set_default("market.timeout_secs", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (KRISHI_ prefix)
            .add_source(
                Environment::with_prefix("KRISHI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        shared::validate_history_days(self.weather.history_days)
            .map_err(|e| ConfigError::Message(format!("weather.history_days: {}", e)))?;
        if self.market.page_size == 0 {
            return Err(ConfigError::Message(
                "market.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl GeocodingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl MarketConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://geocoding-api.open-meteo.com/v1".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: "https://api.open-meteo.com/v1".to_string(),
            archive_base_url: "https://archive-api.open-meteo.com/v1".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            history_days: shared::DEFAULT_HISTORY_DAYS,
            timeout_secs: 30,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.data.gov.in/resource".to_string(),
            resource_id: "35985678-0d79-46b4-9ed6-6f13308a1d24".to_string(),
            api_key: String::new(),
            page_size: 10,
            max_pages: 50,
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            geocoding: GeocodingConfig::default(),
            weather: WeatherConfig::default(),
            market: MarketConfig::default(),
            reference: ReferenceConfig::default(),
        }
    }
}

//! Open-Meteo client for daily climate history and current conditions
//!
//! The forecast endpoint only reaches 92 days into the past, so the daily
//! history comes from the archive endpoint while current conditions come
//! from the forecast endpoint.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared::{trailing_window, today_in_india, CurrentConditions, DailySeries, GeoPoint};

use super::ClimateSource;
use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

const DAILY_VARIABLES: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum";
const CURRENT_VARIABLES: &str = "temperature_2m,relative_humidity_2m,precipitation,weather_code";

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    forecast_base_url: String,
    archive_base_url: String,
    timezone: String,
}

/// Archive API response
#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    #[serde(default)]
    daily: Option<ArchiveDaily>,
}

#[derive(Debug, Deserialize)]
struct ArchiveDaily {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

/// Forecast API response, `current` block only
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current: Option<ForecastCurrent>,
}

#[derive(Debug, Deserialize)]
struct ForecastCurrent {
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    temperature_2m: Option<f64>,
    #[serde(default)]
    relative_humidity_2m: Option<f64>,
    #[serde(default)]
    precipitation: Option<f64>,
    #[serde(default)]
    weather_code: Option<i32>,
}

impl From<ArchiveDaily> for DailySeries {
    fn from(d: ArchiveDaily) -> Self {
        DailySeries {
            dates: d.time,
            temperature_max_celsius: d.temperature_2m_max,
            temperature_min_celsius: d.temperature_2m_min,
            precipitation_sum_mm: d.precipitation_sum,
        }
    }
}

impl From<ForecastCurrent> for CurrentConditions {
    fn from(c: ForecastCurrent) -> Self {
        CurrentConditions {
            time: c.time,
            temperature_celsius: c.temperature_2m,
            humidity_percent: c.relative_humidity_2m,
            precipitation_mm: c.precipitation,
            weather_code: c.weather_code,
        }
    }
}

impl OpenMeteoClient {
    /// Create a new client from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("weather HTTP client: {}", e)))?;
        Ok(Self {
            client,
            forecast_base_url: config.forecast_base_url.trim_end_matches('/').to_string(),
            archive_base_url: config.archive_base_url.trim_end_matches('/').to_string(),
            timezone: config.timezone.clone(),
        })
    }

    /// Create a client with both endpoints on one base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            forecast_base_url: base_url.clone(),
            archive_base_url: base_url,
            timezone: "Asia/Kolkata".to_string(),
        }
    }

    /// Fetch daily history between two inclusive dates
    pub async fn daily_between(
        &self,
        point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<DailySeries> {
        let url = format!("{}/archive", self.archive_base_url);
        let params = [
            ("latitude", point.latitude.to_string()),
            ("longitude", point.longitude.to_string()),
            ("start_date", start.format("%Y-%m-%d").to_string()),
            ("end_date", end.format("%Y-%m-%d").to_string()),
            ("daily", DAILY_VARIABLES.to_string()),
            ("timezone", self.timezone.clone()),
        ];

        let data: ArchiveResponse = self.get_json(&url, &params).await?;
        let daily = data
            .daily
            .ok_or_else(|| AppError::UpstreamData("archive response has no daily block".into()))?;

        tracing::debug!(%point, %start, %end, days = daily.time.len(), "fetched daily history");
        Ok(daily.into())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                AppError::WeatherServiceUnavailable(format!("Weather API request failed: {}", e))
            })?;

        let status = response.status();
        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherServiceUnavailable(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamData(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::UpstreamData(format!("Failed to parse weather response: {}", e)))
    }
}

#[async_trait]
impl ClimateSource for OpenMeteoClient {
    async fn daily_history(&self, point: GeoPoint, window_days: u32) -> AppResult<DailySeries> {
        let (start, end) = trailing_window(today_in_india(), window_days);
        self.daily_between(point, start, end).await
    }

    async fn current(&self, point: GeoPoint) -> AppResult<CurrentConditions> {
        let url = format!("{}/forecast", self.forecast_base_url);
        let params = [
            ("latitude", point.latitude.to_string()),
            ("longitude", point.longitude.to_string()),
            ("current", CURRENT_VARIABLES.to_string()),
            ("timezone", self.timezone.clone()),
        ];

        let data: ForecastResponse = self.get_json(&url, &params).await?;
        let current = data.current.ok_or_else(|| {
            AppError::UpstreamData("forecast response has no current block".into())
        })?;

        Ok(current.into())
    }
}

//! Open-Meteo geocoding client
//!
//! `GET {base}/search?name=<query>&count=1` returns the best match, or no
//! `results` array at all when nothing matched.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::Location;

use super::Geocoder;
use crate::config::GeocodingConfig;
use crate::error::{AppError, AppResult};

/// Geocoding API client
#[derive(Clone)]
pub struct OpenMeteoGeocoder {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    admin1: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    country_code: Option<String>,
}

impl From<SearchResult> for Location {
    fn from(r: SearchResult) -> Self {
        Location {
            name: r.name,
            latitude: r.latitude,
            longitude: r.longitude,
            state: r.admin1,
            country: r.country,
            country_code: r.country_code,
        }
    }
}

impl OpenMeteoGeocoder {
    pub fn new(config: &GeocodingConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("geocoding HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a geocoder against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, query: &str) -> AppResult<Option<Location>> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("name", query), ("count", "1"), ("language", "en"), ("format", "json")])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Geocoding API error: {} - {}",
                status, body
            )));
        }

        let data: SearchResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse geocoding response: {}", e))
        })?;

        let location = data
            .results
            .and_then(|results| results.into_iter().next())
            .map(Location::from);

        match &location {
            Some(loc) => tracing::debug!(query, name = %loc.name, point = %loc.point(), "geocoded"),
            None => tracing::debug!(query, "no geocoding match"),
        }

        Ok(location)
    }
}

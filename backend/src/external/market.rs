//! data.gov.in client for the daily mandi price dataset

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::{MarketPriceQuery, MarketPriceRecord};

use super::MarketPriceSource;
use crate::config::MarketConfig;
use crate::error::{AppError, AppResult};

/// data.gov.in resource API client
#[derive(Clone)]
pub struct DataGovMarketClient {
    client: Client,
    resource_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ResourceResponse {
    #[serde(default)]
    records: Vec<MarketPriceRecord>,
}

impl DataGovMarketClient {
    pub fn new(config: &MarketConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("market HTTP client: {}", e)))?;
        Ok(Self {
            client,
            resource_url: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                config.resource_id
            ),
            api_key: config.api_key.clone(),
        })
    }

    /// Create a client against a custom resource URL (for testing)
    pub fn with_base_url(resource_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            resource_url: resource_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl MarketPriceSource for DataGovMarketClient {
    async fn fetch_page(
        &self,
        query: &MarketPriceQuery,
        offset: u32,
        limit: u32,
    ) -> AppResult<Vec<MarketPriceRecord>> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "market.api_key is not set".to_string(),
            ));
        }

        let params = [
            ("api-key", self.api_key.clone()),
            ("format", "json".to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("filters[State]", query.state.clone()),
            ("filters[District]", query.district.clone()),
            ("filters[Arrival_Date]", query.arrival_date_param()),
        ];

        let response = self
            .client
            .get(&self.resource_url)
            .query(&params)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::MarketApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::MarketApi(format!("{} - {}", status, body)));
        }

        let data: ResourceResponse = response
            .json()
            .await
            .map_err(|e| AppError::MarketApi(format!("failed to parse response: {}", e)))?;

        tracing::debug!(offset, limit, records = data.records.len(), "fetched market page");
        Ok(data.records)
    }
}

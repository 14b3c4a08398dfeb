//! Mandi price lookup across a district's markets

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use shared::{filter_by_commodity, today_in_india, MarketPriceQuery, MarketPriceReport};

use crate::config::MarketConfig;
use crate::error::{AppError, AppResult};
use crate::external::MarketPriceSource;

/// Market price service
#[derive(Clone)]
pub struct MarketService {
    source: Arc<dyn MarketPriceSource>,
    page_size: u32,
    max_pages: u32,
}

impl MarketService {
    pub fn new(source: Arc<dyn MarketPriceSource>, config: &MarketConfig) -> Self {
        Self {
            source,
            page_size: config.page_size.max(1),
            max_pages: config.max_pages,
        }
    }

    /// Prices for `crop` in a district; `arrival_date` defaults to yesterday in India
    pub async fn prices(
        &self,
        crop: &str,
        state: &str,
        district: &str,
        arrival_date: Option<NaiveDate>,
    ) -> AppResult<MarketPriceReport> {
        let crop = crop.trim();
        if crop.is_empty() {
            return Err(AppError::Validation {
                field: "crop".to_string(),
                message: "Crop name must not be empty".to_string(),
            });
        }

        let query = MarketPriceQuery {
            crop: crop.to_string(),
            state: state.trim().to_string(),
            district: district.trim().to_string(),
            arrival_date: arrival_date.unwrap_or_else(|| today_in_india() - Duration::days(1)),
        };

        let mut all_records = Vec::new();
        let mut offset = 0;
        for page in 0..self.max_pages {
            let records = self.source.fetch_page(&query, offset, self.page_size).await?;
            if records.is_empty() {
                break;
            }
            tracing::debug!(page, fetched = records.len(), "market page");
            all_records.extend(records);
            offset += self.page_size;
        }

        let records = filter_by_commodity(all_records, crop);
        let note = records.is_empty().then(|| {
            format!(
                "{} has not been traded on {}. Historical prices would give an idea of the price.",
                crop,
                query.arrival_date_param()
            )
        });

        tracing::info!(
            crop,
            state = %query.state,
            district = %query.district,
            records = records.len(),
            "market prices fetched"
        );

        Ok(MarketPriceReport {
            crop: query.crop,
            state: query.state,
            district: query.district,
            arrival_date: query.arrival_date,
            records,
            note,
        })
    }
}

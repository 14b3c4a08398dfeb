//! HTTP handlers for mandi prices

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::MarketPriceReport;

use crate::error::AppResult;
use crate::services::MarketService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MarketPriceParams {
    pub crop: String,
    pub state: String,
    pub district: String,
    /// Arrival date (YYYY-MM-DD); yesterday when omitted
    pub date: Option<NaiveDate>,
}

/// Prices of a crop across a district's markets
pub async fn get_market_prices(
    State(state): State<AppState>,
    Query(params): Query<MarketPriceParams>,
) -> AppResult<Json<MarketPriceReport>> {
    let service = MarketService::new(state.market.clone(), &state.config.market);
    let report = service
        .prices(&params.crop, &params.state, &params.district, params.date)
        .await?;
    Ok(Json(report))
}

//! HTTP handlers for current weather conditions

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::{ConditionsReport, ConditionsService};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions and extreme-weather alerts at a point
pub async fn get_current_conditions(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> AppResult<Json<ConditionsReport>> {
    let service = ConditionsService::new(state.climate.clone());
    let report = service.current(query.latitude, query.longitude).await?;
    Ok(Json(report))
}

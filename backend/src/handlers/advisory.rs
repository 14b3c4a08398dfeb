//! HTTP handler for the crop and livestock advisory

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::AnalysisResult;
use validator::Validate;

use crate::error::AppResult;
use crate::services::AdvisoryService;
use crate::AppState;

/// Request body for an advisory
#[derive(Debug, Deserialize, Validate)]
pub struct AdvisoryRequest {
    /// Free-text place name, e.g. "Pune" or "Nashik, Maharashtra"
    #[validate(length(
        min = 1,
        max = 200,
        message = "Location must be between 1 and 200 characters"
    ))]
    pub location: String,
}

/// Run the full advisory for a location
pub async fn create_advisory(
    State(state): State<AppState>,
    Json(input): Json<AdvisoryRequest>,
) -> AppResult<Json<AnalysisResult>> {
    input.validate()?;

    let service = AdvisoryService::new(
        state.geocoder.clone(),
        state.climate.clone(),
        state.reference.clone(),
        state.config.weather.history_days,
    );
    let result = service.analyze(&input.location).await?;
    Ok(Json(result))
}

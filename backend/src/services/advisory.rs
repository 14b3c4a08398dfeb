//! Season-aware crop and livestock advisory pipeline
//!
//! Resolves the location, summarises its climate, then applies the pure
//! agronomic rules from `shared` in order: water classification, season,
//! crop matching, seasonal filtering and livestock advice.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{
    baseline_livestock, classify_water, filter_for_season, match_crops, recommend_livestock,
    today_in_india, validate_coordinates, validate_location_query, AnalysisResult,
    CropRecommendations, EnvironmentalAnalysis, Location, ReferenceData, Season,
    SeasonalRecommendation,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::{ClimateSource, Geocoder};
use crate::services::ClimateService;

/// Orchestrates one advisory analysis per call
#[derive(Clone)]
pub struct AdvisoryService {
    geocoder: Arc<dyn Geocoder>,
    climate: ClimateService,
    reference: Arc<ReferenceData>,
    history_days: u32,
}

impl AdvisoryService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        climate: Arc<dyn ClimateSource>,
        reference: Arc<ReferenceData>,
        history_days: u32,
    ) -> Self {
        Self {
            geocoder,
            climate: ClimateService::new(climate),
            reference,
            history_days,
        }
    }

    /// Analyse a location for today's date in India
    pub async fn analyze(&self, query: &str) -> AppResult<AnalysisResult> {
        self.analyze_on(query, today_in_india()).await
    }

    /// Analyse a location as of `date`.
    ///
    /// Only an unresolvable or out-of-area location fails the call. A climate
    /// failure is reported inside the environmental section and the rest of
    /// the analysis degrades to rules that need no climate data.
    pub async fn analyze_on(&self, query: &str, date: NaiveDate) -> AppResult<AnalysisResult> {
        let query = query.trim();
        validate_location_query(query).map_err(|e| AppError::Validation {
            field: "location".to_string(),
            message: e.to_string(),
        })?;

        let span = tracing::info_span!("analysis", analysis_id = %Uuid::new_v4(), query);
        self.run(query, date).instrument(span).await
    }

    async fn run(&self, query: &str, date: NaiveDate) -> AppResult<AnalysisResult> {
        let location = self.locate(query).await?;
        let state = location.state_name().to_string();
        let season = Season::for_date(date);

        let environment = match self
            .climate
            .summarize(location.point(), self.history_days)
            .await
        {
            Ok(summary) => {
                let water = classify_water(summary.annual_rainfall_mm);
                EnvironmentalAnalysis::available(summary, water)
            }
            Err(e) => {
                tracing::warn!(error = %e, "climate data unavailable, continuing without it");
                EnvironmentalAnalysis::unavailable(format!(
                    "Environmental data could not be retrieved: {}",
                    e
                ))
            }
        };

        let (all_crops, seasonal, livestock) = match (&environment.climate, &environment.water) {
            (Some(summary), Some(water)) => {
                let all_crops = match_crops(&self.reference.crops, summary);
                let seasonal = filter_for_season(&all_crops, season);
                let livestock =
                    recommend_livestock(&self.reference.regions, &state, summary, water);
                (all_crops, seasonal, livestock)
            }
            _ => (
                CropRecommendations::new(),
                SeasonalRecommendation::without_climate(season),
                baseline_livestock(&self.reference.regions, &state),
            ),
        };

        tracing::info!(
            location = %location.name,
            %season,
            environment = ?environment.status,
            timely_crops = seasonal.timely_recommendations.len(),
            livestock = livestock.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            current_season_analysis: seasonal,
            location_details: location,
            environmental_analysis: environment,
            all_season_crop_recommendations: all_crops,
            integrated_farming_suggestions: livestock,
        })
    }

    /// Geocode the query and enforce the India service area
    async fn locate(&self, query: &str) -> AppResult<Location> {
        let location = self
            .geocoder
            .resolve(query)
            .await?
            .ok_or_else(|| AppError::LocationNotFound(query.to_string()))?;

        if validate_coordinates(location.latitude, location.longitude).is_err() {
            tracing::warn!(
                latitude = location.latitude,
                longitude = location.longitude,
                "geocoder returned invalid coordinates"
            );
            return Err(AppError::LocationNotFound(query.to_string()));
        }

        if !location.is_in_india() {
            return Err(AppError::OutsideServiceArea {
                name: location.name,
                latitude: location.latitude,
                longitude: location.longitude,
            });
        }

        tracing::debug!(name = %location.name, state = location.state_name(), "location resolved");
        Ok(location)
    }
}

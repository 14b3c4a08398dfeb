//! Climate aggregation over a trailing window of daily observations

use std::sync::Arc;

use shared::{ClimateSummary, GeoPoint};

use crate::error::{AppError, AppResult};
use crate::external::ClimateSource;

/// Reduces climate history at a point to a [`ClimateSummary`]
#[derive(Clone)]
pub struct ClimateService {
    source: Arc<dyn ClimateSource>,
}

impl ClimateService {
    pub fn new(source: Arc<dyn ClimateSource>) -> Self {
        Self { source }
    }

    /// Summarise the trailing `window_days` of weather at `point`.
    ///
    /// Humidity is the current reading, not an average over the window.
    pub async fn summarize(&self, point: GeoPoint, window_days: u32) -> AppResult<ClimateSummary> {
        shared::validate_history_days(window_days)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let series = self.source.daily_history(point, window_days).await?;
        let current = self.source.current(point).await?;

        let summary = series.summarize(current.humidity_percent, window_days)?;

        tracing::info!(
            %point,
            window_days,
            days = series.len(),
            average_temperature_celsius = summary.average_temperature_celsius,
            annual_rainfall_mm = summary.annual_rainfall_mm,
            "climate summarised"
        );

        Ok(summary)
    }
}

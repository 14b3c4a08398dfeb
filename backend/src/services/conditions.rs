//! Current weather conditions with extreme-weather alerts

use std::sync::Arc;

use serde::Serialize;
use shared::{extreme_alerts, validate_coordinates, CurrentConditions, GeoPoint, WeatherAlert};

use crate::error::{AppError, AppResult};
use crate::external::ClimateSource;

/// Current conditions at a point
#[derive(Debug, Clone, Serialize)]
pub struct ConditionsReport {
    pub location: GeoPoint,
    pub current: CurrentConditions,
    pub alerts: Vec<WeatherAlert>,
}

#[derive(Clone)]
pub struct ConditionsService {
    source: Arc<dyn ClimateSource>,
}

impl ConditionsService {
    pub fn new(source: Arc<dyn ClimateSource>) -> Self {
        Self { source }
    }

    pub async fn current(&self, latitude: f64, longitude: f64) -> AppResult<ConditionsReport> {
        validate_coordinates(latitude, longitude)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let point = GeoPoint::new(latitude, longitude);
        let current = self.source.current(point).await?;
        let alerts = current.weather_code.map(extreme_alerts).unwrap_or_default();

        if !alerts.is_empty() {
            tracing::warn!(%point, code = ?current.weather_code, "extreme weather at location");
        }

        Ok(ConditionsReport {
            location: point,
            current,
            alerts,
        })
    }
}

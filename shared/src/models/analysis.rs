//! Agronomic analysis result returned to the agent layer

use serde::{Deserialize, Serialize};

use super::climate::ClimateSummary;
use super::crop::{CropRecommendations, SeasonalRecommendation};
use super::livestock::LivestockSuggestions;
use super::location::Location;
use super::water::WaterProfile;

/// Whether the environmental section carries data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentStatus {
    Ok,
    Unavailable,
}

/// Climate and water section of the analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentalAnalysis {
    pub status: EnvironmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<ClimateSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<WaterProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl EnvironmentalAnalysis {
    pub fn available(climate: ClimateSummary, water: WaterProfile) -> Self {
        Self {
            status: EnvironmentStatus::Ok,
            climate: Some(climate),
            water: Some(water),
            note: None,
        }
    }

    pub fn unavailable(note: impl Into<String>) -> Self {
        Self {
            status: EnvironmentStatus::Unavailable,
            climate: None,
            water: None,
            note: Some(note.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == EnvironmentStatus::Ok
    }
}

/// Full recommendation for one location.
///
/// Field order is the serialized key order; the seasonal analysis comes
/// first because callers read it first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub current_season_analysis: SeasonalRecommendation,
    pub location_details: Location,
    pub environmental_analysis: EnvironmentalAnalysis,
    pub all_season_crop_recommendations: CropRecommendations,
    pub integrated_farming_suggestions: LivestockSuggestions,
}

//! Crop requirement models and agro-climatic matching

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::climate::ClimateSummary;
use super::season::Season;

/// Grouping tag a crop can be recommended under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SeasonTag {
    Kharif,
    Rabi,
    Zaid,
    Horticulture,
    CashCrop,
    Plantation,
}

impl SeasonTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonTag::Kharif => "kharif",
            SeasonTag::Rabi => "rabi",
            SeasonTag::Zaid => "zaid",
            SeasonTag::Horticulture => "horticulture",
            SeasonTag::CashCrop => "cash_crop",
            SeasonTag::Plantation => "plantation",
        }
    }
}

impl From<Season> for SeasonTag {
    fn from(season: Season) -> Self {
        match season {
            Season::Kharif => SeasonTag::Kharif,
            Season::Rabi => SeasonTag::Rabi,
            Season::Zaid => SeasonTag::Zaid,
        }
    }
}

impl std::fmt::Display for SeasonTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SeasonTag {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kharif" => Ok(SeasonTag::Kharif),
            "rabi" => Ok(SeasonTag::Rabi),
            "zaid" => Ok(SeasonTag::Zaid),
            "horticulture" => Ok(SeasonTag::Horticulture),
            "cash_crop" => Ok(SeasonTag::CashCrop),
            "plantation" => Ok(SeasonTag::Plantation),
            _ => Err("Unknown season tag"),
        }
    }
}

/// Agro-climatic requirements of a single crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRequirement {
    pub name: String,
    pub min_temp_celsius: f64,
    pub max_temp_celsius: f64,
    pub min_rainfall_mm: f64,
    pub seasons: Vec<SeasonTag>,
}

impl CropRequirement {
    /// Temperature within the inclusive range and rainfall at least the minimum
    pub fn suits(&self, summary: &ClimateSummary) -> bool {
        let temp = summary.average_temperature_celsius;
        temp >= self.min_temp_celsius
            && temp <= self.max_temp_celsius
            && summary.annual_rainfall_mm >= self.min_rainfall_mm
    }
}

/// Immutable crop requirements table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropCatalog {
    crops: Vec<CropRequirement>,
}

impl CropCatalog {
    pub fn new(crops: Vec<CropRequirement>) -> Self {
        Self { crops }
    }

    pub fn crops(&self) -> &[CropRequirement] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CropRequirement> {
        self.crops.iter().find(|c| c.name == name)
    }
}

/// Suitable crop names grouped by season tag, each list sorted and unique
pub type CropRecommendations = BTreeMap<SeasonTag, Vec<String>>;

/// Filter the catalog against a climate summary.
///
/// A suitable crop is listed under every one of its tags. Tags with no
/// suitable crop are omitted.
pub fn match_crops(catalog: &CropCatalog, summary: &ClimateSummary) -> CropRecommendations {
    let mut grouped: BTreeMap<SeasonTag, BTreeSet<&str>> = BTreeMap::new();

    for crop in catalog.crops().iter().filter(|c| c.suits(summary)) {
        for tag in &crop.seasons {
            grouped.entry(*tag).or_default().insert(crop.name.as_str());
        }
    }

    grouped
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .map(|(tag, names)| (tag, names.into_iter().map(str::to_string).collect()))
        .collect()
}

pub const SOWING_WINDOW_PASSED_NOTE: &str = "The main sowing window for this season may have passed or conditions are not ideal for its typical crops. Focus on other recommendations.";

pub const CLIMATE_UNAVAILABLE_NOTE: &str = "Environmental data could not be retrieved for this location, so crop suitability for the current season could not be assessed.";

/// Crops to sow in the active season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonalRecommendation {
    #[serde(rename = "current_season_name")]
    pub season: Season,
    pub timely_recommendations: Vec<String>,
    pub note: String,
}

impl SeasonalRecommendation {
    /// Recommendation when no climate summary was available to match against
    pub fn without_climate(season: Season) -> Self {
        Self {
            season,
            timely_recommendations: Vec::new(),
            note: CLIMATE_UNAVAILABLE_NOTE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.timely_recommendations.is_empty()
    }
}

/// Narrow the all-season recommendations to the active season
pub fn filter_for_season(
    all_crops: &CropRecommendations,
    season: Season,
) -> SeasonalRecommendation {
    match all_crops.get(&SeasonTag::from(season)) {
        Some(crops) if !crops.is_empty() => SeasonalRecommendation {
            season,
            timely_recommendations: crops.clone(),
            note: format!(
                "These are the most suitable crops for the ongoing {} season. Sowing should be planned immediately.",
                season
            ),
        },
        _ => SeasonalRecommendation {
            season,
            timely_recommendations: Vec::new(),
            note: SOWING_WINDOW_PASSED_NOTE.to_string(),
        },
    }
}

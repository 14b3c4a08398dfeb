//! Reference tables used by the recommendation rules
//!
//! The crop requirements table ships as an embedded CSV asset and can be
//! replaced at start-up with a file of the same shape:
//!
//! ```text
//! crop,min_temp_c,max_temp_c,min_rainfall_mm,seasons
//! maize,21,30,600,kharif|rabi|zaid
//! ```

use std::collections::HashSet;
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{CropCatalog, CropRequirement, RegionProfile, SeasonTag};

const EMBEDDED_CROP_TABLE: &str = include_str!("../data/crop_requirements.csv");

/// Errors loading reference data
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("crop table is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("crop '{crop}' has unknown season tag '{tag}'")]
    UnknownSeasonTag { crop: String, tag: String },

    #[error("crop '{crop}' has an invalid range: {reason}")]
    InvalidRange { crop: String, reason: &'static str },

    #[error("crop '{0}' appears more than once")]
    DuplicateCrop(String),

    #[error("crop table has no entries")]
    EmptyTable,
}

#[derive(Debug, Deserialize)]
struct CropRow {
    crop: String,
    min_temp_c: f64,
    max_temp_c: f64,
    min_rainfall_mm: f64,
    seasons: String,
}

impl CropRow {
    fn into_requirement(self) -> Result<CropRequirement, ReferenceError> {
        let name = self.crop.trim().to_string();

        if !(self.min_temp_c.is_finite() && self.max_temp_c.is_finite()) {
            return Err(ReferenceError::InvalidRange {
                crop: name,
                reason: "temperatures must be finite",
            });
        }
        if self.min_temp_c > self.max_temp_c {
            return Err(ReferenceError::InvalidRange {
                crop: name,
                reason: "min_temp_c exceeds max_temp_c",
            });
        }
        if !(self.min_rainfall_mm >= 0.0) {
            return Err(ReferenceError::InvalidRange {
                crop: name,
                reason: "min_rainfall_mm must be non-negative",
            });
        }

        let seasons = self
            .seasons
            .split('|')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(|tag| {
                tag.parse::<SeasonTag>()
                    .map_err(|_| ReferenceError::UnknownSeasonTag {
                        crop: name.clone(),
                        tag: tag.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CropRequirement {
            name,
            min_temp_celsius: self.min_temp_c,
            max_temp_celsius: self.max_temp_c,
            min_rainfall_mm: self.min_rainfall_mm,
            seasons,
        })
    }
}

impl CropCatalog {
    /// Parse a crop requirements table from CSV
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ReferenceError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut seen = HashSet::new();
        let mut crops = Vec::new();

        for row in rdr.deserialize::<CropRow>() {
            let requirement = row?.into_requirement()?;
            if !seen.insert(requirement.name.clone()) {
                return Err(ReferenceError::DuplicateCrop(requirement.name));
            }
            crops.push(requirement);
        }

        if crops.is_empty() {
            return Err(ReferenceError::EmptyTable);
        }
        Ok(CropCatalog::new(crops))
    }

    /// The crop table bundled with the crate
    pub fn embedded() -> Result<Self, ReferenceError> {
        Self::from_csv_reader(EMBEDDED_CROP_TABLE.as_bytes())
    }
}

/// All reference data needed by the recommendation pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub crops: CropCatalog,
    pub regions: RegionProfile,
}

impl ReferenceData {
    pub fn new(crops: CropCatalog, regions: RegionProfile) -> Self {
        Self { crops, regions }
    }

    /// Bundled crop table with the default region profile
    pub fn embedded() -> Result<Self, ReferenceError> {
        Ok(Self::new(CropCatalog::embedded()?, RegionProfile::default()))
    }
}

//! Water availability classification

use serde::{Deserialize, Serialize};

/// Rainfall above which water is abundant (mm over the window)
pub const HIGH_RAINFALL_MM: f64 = 1200.0;

/// Rainfall above which water is moderately available (mm over the window)
pub const MEDIUM_RAINFALL_MM: f64 = 600.0;

/// Advisory on where water typically comes from
pub const WATER_SOURCE_NOTE: &str =
    "Likely rain-fed, supplemented by groundwater (wells/borewells) and canals.";

/// Qualitative rainfall sufficiency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WaterAbundance {
    Low,
    Medium,
    High,
}

/// How much supplementary irrigation crops will need
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IrrigationNeed {
    Low,
    Medium,
    High,
}

impl WaterAbundance {
    /// Irrigation need is the inverse of abundance
    pub fn irrigation_need(self) -> IrrigationNeed {
        match self {
            WaterAbundance::High => IrrigationNeed::Low,
            WaterAbundance::Medium => IrrigationNeed::Medium,
            WaterAbundance::Low => IrrigationNeed::High,
        }
    }

    /// Enough water to sustain dairy cattle
    pub fn supports_dairy(self) -> bool {
        matches!(self, WaterAbundance::Medium | WaterAbundance::High)
    }
}

impl std::fmt::Display for WaterAbundance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterAbundance::Low => write!(f, "Low"),
            WaterAbundance::Medium => write!(f, "Medium"),
            WaterAbundance::High => write!(f, "High"),
        }
    }
}

impl std::fmt::Display for IrrigationNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrrigationNeed::Low => write!(f, "Low"),
            IrrigationNeed::Medium => write!(f, "Medium"),
            IrrigationNeed::High => write!(f, "High"),
        }
    }
}

/// Water availability derived from rainfall
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaterProfile {
    pub water_abundance: WaterAbundance,
    pub irrigation_need: IrrigationNeed,
    pub source_note: String,
}

/// Classify water availability from rainfall over the climate window
pub fn classify_water(rainfall_mm: f64) -> WaterProfile {
    let water_abundance = if rainfall_mm > HIGH_RAINFALL_MM {
        WaterAbundance::High
    } else if rainfall_mm > MEDIUM_RAINFALL_MM {
        WaterAbundance::Medium
    } else {
        WaterAbundance::Low
    };

    WaterProfile {
        water_abundance,
        irrigation_need: water_abundance.irrigation_need(),
        source_note: WATER_SOURCE_NOTE.to_string(),
    }
}

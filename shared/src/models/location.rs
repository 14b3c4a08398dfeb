//! Geocoded location models

use serde::{Deserialize, Serialize};

use crate::types::GeoPoint;
use crate::validation::{is_within_india_bounds, validate_coordinates, INDIA_COUNTRY_CODE};

/// A place resolved from a free-text query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// First-level administrative region (the Indian state)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            state: None,
            country: None,
            country_code: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>, code: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self.country_code = Some(code.into());
        self
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// State name used for region-specific rules; empty when unknown
    pub fn state_name(&self) -> &str {
        self.state.as_deref().map(str::trim).unwrap_or("")
    }

    /// Whether this location is inside the supported service area.
    ///
    /// The geocoder's country code is authoritative when present; otherwise
    /// the point must fall inside India's bounding box.
    pub fn is_in_india(&self) -> bool {
        if validate_coordinates(self.latitude, self.longitude).is_err() {
            return false;
        }
        match self.country_code.as_deref() {
            Some(code) => code.trim().eq_ignore_ascii_case(INDIA_COUNTRY_CODE),
            None => is_within_india_bounds(self.point()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_is_authoritative() {
        let pune = Location::new("Pune", 18.52, 73.85).with_country("India", "IN");
        assert!(pune.is_in_india());

        // Lahore sits inside India's bounding box but is reported as Pakistan
        let lahore = Location::new("Lahore", 31.55, 74.34).with_country("Pakistan", "PK");
        assert!(!lahore.is_in_india());
    }

    #[test]
    fn test_bounding_box_fallback() {
        assert!(Location::new("Nagpur", 21.15, 79.09).is_in_india());
        assert!(!Location::new("London", 51.51, -0.13).is_in_india());
    }

    #[test]
    fn test_invalid_coordinates_never_in_india() {
        let broken = Location::new("Nowhere", 120.0, 73.0).with_country("India", "in");
        assert!(!broken.is_in_india());
    }

    #[test]
    fn test_state_name_defaults_to_empty() {
        assert_eq!(Location::new("Pune", 18.52, 73.85).state_name(), "");
        let pune = Location::new("Pune", 18.52, 73.85).with_state(" Maharashtra ");
        assert_eq!(pune.state_name(), "Maharashtra");
    }
}

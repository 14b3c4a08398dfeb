//! Validation utilities for the Krishi Advisor platform
//!
//! Includes India-specific checks used to decide whether a resolved
//! location can be analysed.

use crate::types::GeoPoint;

// ============================================================================
// General Validations
// ============================================================================

/// Maximum accepted length of a free-text location query
pub const MAX_LOCATION_QUERY_LEN: usize = 200;

/// Longest climate window accepted (ten years of daily records)
pub const MAX_HISTORY_DAYS: u32 = 3650;

/// Validate latitude/longitude are on the globe
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180 degrees");
    }
    Ok(())
}

/// Validate a free-text location query
pub fn validate_location_query(query: &str) -> Result<(), &'static str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err("Location query cannot be empty");
    }
    if trimmed.chars().count() > MAX_LOCATION_QUERY_LEN {
        return Err("Location query must be at most 200 characters");
    }
    Ok(())
}

/// Validate a calendar month number
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err("Month must be between 1 and 12")
    }
}

/// Validate the trailing climate window length
pub fn validate_history_days(days: u32) -> Result<(), &'static str> {
    if days == 0 {
        return Err("History window must be at least one day");
    }
    if days > MAX_HISTORY_DAYS {
        return Err("History window must be at most 3650 days");
    }
    Ok(())
}

// ============================================================================
// India-Specific Validations
// ============================================================================

/// India's approximate bounding box (mainland plus island territories)
pub const INDIA_LATITUDE_RANGE: (f64, f64) = (6.0, 37.6);
pub const INDIA_LONGITUDE_RANGE: (f64, f64) = (68.0, 97.5);

/// ISO 3166-1 alpha-2 code reported by geocoders for India
pub const INDIA_COUNTRY_CODE: &str = "IN";

/// Check whether a point falls inside India's bounding box
pub fn is_within_india_bounds(point: GeoPoint) -> bool {
    let (lat_min, lat_max) = INDIA_LATITUDE_RANGE;
    let (lng_min, lng_max) = INDIA_LONGITUDE_RANGE;
    point.latitude >= lat_min
        && point.latitude <= lat_max
        && point.longitude >= lng_min
        && point.longitude <= lng_max
}

//! WebAssembly module for the Krishi Advisor platform
//!
//! Runs the agronomic rules in the browser so field apps can give advice
//! offline once climate figures are known:
//! - Water availability classification
//! - Season lookup
//! - Crop and livestock recommendations
//! - Service area check

use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    classify_water, is_within_india_bounds, match_crops, validate_coordinates, validate_month,
    ClimateSummary, CropCatalog, GeoPoint, RegionProfile, Season,
};

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn season_name(month: u32) -> Result<String, String> {
    validate_month(month).map_err(|e| format!("{}, got {}", e, month))?;
    Season::from_month(month)
        .map(|s| s.to_string())
        .ok_or_else(|| format!("No season for month {}", month))
}

fn crops_json(avg_temp_c: f64, rainfall_mm: f64) -> Result<String, String> {
    if !(avg_temp_c.is_finite() && rainfall_mm.is_finite()) {
        return Err("Temperature and rainfall must be finite numbers".to_string());
    }
    let catalog = CropCatalog::embedded().map_err(|e| e.to_string())?;
    let summary = ClimateSummary::new(avg_temp_c, rainfall_mm.max(0.0), 0.0);
    to_json(&match_crops(&catalog, &summary))
}

fn livestock_json(state: &str, rainfall_mm: f64) -> Result<String, String> {
    if !rainfall_mm.is_finite() {
        return Err("Rainfall must be a finite number".to_string());
    }
    let rainfall_mm = rainfall_mm.max(0.0);
    // Livestock rules only read rainfall
    let summary = ClimateSummary::new(0.0, rainfall_mm, 0.0);
    let water = classify_water(rainfall_mm);
    to_json(&shared::recommend_livestock(&RegionProfile::default(), state, &summary, &water))
}

/// Water abundance, irrigation need and advisory note for annual rainfall (mm), as JSON
#[wasm_bindgen]
pub fn classify_water_availability(rainfall_mm: f64) -> Result<String, JsValue> {
    to_json(&classify_water(rainfall_mm)).map_err(|e| JsValue::from_str(&e))
}

/// Agricultural season ("kharif", "rabi" or "zaid") for a month (1-12)
#[wasm_bindgen]
pub fn season_for_month(month: u32) -> Result<String, JsValue> {
    season_name(month).map_err(|e| JsValue::from_str(&e))
}

/// Suitable crops grouped by season tag, as JSON
#[wasm_bindgen]
pub fn recommend_crops(avg_temp_c: f64, rainfall_mm: f64) -> Result<String, JsValue> {
    crops_json(avg_temp_c, rainfall_mm).map_err(|e| JsValue::from_str(&e))
}

/// Livestock suggestions keyed by activity, as JSON
#[wasm_bindgen]
pub fn recommend_livestock(state: &str, rainfall_mm: f64) -> Result<String, JsValue> {
    livestock_json(state, rainfall_mm).map_err(|e| JsValue::from_str(&e))
}

/// Whether coordinates fall inside India's bounding box
#[wasm_bindgen]
pub fn is_within_india(latitude: f64, longitude: f64) -> bool {
    validate_coordinates(latitude, longitude).is_ok()
        && is_within_india_bounds(GeoPoint::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_json() {
        let json = classify_water_availability(1500.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["water_abundance"], "High");
        assert_eq!(value["irrigation_need"], "Low");
    }

    #[test]
    fn test_season_name() {
        assert_eq!(season_name(7).unwrap(), "kharif");
        assert_eq!(season_name(1).unwrap(), "rabi");
        assert_eq!(season_name(4).unwrap(), "zaid");
        assert!(season_name(13).is_err());
    }

    #[test]
    fn test_crops_json() {
        let value: serde_json::Value =
            serde_json::from_str(&crops_json(25.0, 700.0).unwrap()).unwrap();
        let kharif: Vec<&str> = value["kharif"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(kharif.contains(&"maize"));
        assert!(!kharif.contains(&"rice"));
        assert!(crops_json(f64::NAN, 700.0).is_err());
    }

    #[test]
    fn test_livestock_json() {
        let value: serde_json::Value =
            serde_json::from_str(&livestock_json("Punjab", 900.0).unwrap()).unwrap();
        assert!(value["Poultry (Broilers and Layers)"].is_string());
        assert!(value["Dairy Cattle"].as_str().unwrap().contains("Sahiwal"));
        assert!(value.get("Goat Farming").is_none());
    }

    #[test]
    fn test_india_bounds() {
        assert!(is_within_india(18.52, 73.85));
        assert!(!is_within_india(51.51, -0.13));
        assert!(!is_within_india(120.0, 73.0));
    }
}

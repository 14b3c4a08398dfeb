//! Integrated farming (livestock) suggestions

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::climate::ClimateSummary;
use super::water::{WaterAbundance, WaterProfile};

/// Rainfall below which goats are suggested over water-hungry livestock
pub const GOAT_RAINFALL_CEILING_MM: f64 = 800.0;

/// Breed advice for states without a specific entry
pub const DEFAULT_BREED_SUGGESTION: &str =
    "local crossbred varieties like Holstein-Friesian (HF) or Jersey crosses";

/// Complementary livestock activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LivestockActivity {
    #[serde(rename = "Poultry (Broilers and Layers)")]
    Poultry,
    #[serde(rename = "Goat Farming")]
    GoatFarming,
    #[serde(rename = "Dairy Cattle")]
    DairyCattle,
    #[serde(rename = "Aquaculture/Fisheries")]
    Aquaculture,
}

impl std::fmt::Display for LivestockActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LivestockActivity::Poultry => write!(f, "Poultry (Broilers and Layers)"),
            LivestockActivity::GoatFarming => write!(f, "Goat Farming"),
            LivestockActivity::DairyCattle => write!(f, "Dairy Cattle"),
            LivestockActivity::Aquaculture => write!(f, "Aquaculture/Fisheries"),
        }
    }
}

/// Suggested activities keyed by activity, each with its rationale
pub type LivestockSuggestions = BTreeMap<LivestockActivity, String>;

/// Region reference data: cattle breeds by state and the coastal states
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProfile {
    state_breeds: BTreeMap<String, String>,
    coastal_states: BTreeSet<String>,
}

impl RegionProfile {
    pub fn new(state_breeds: BTreeMap<String, String>, coastal_states: BTreeSet<String>) -> Self {
        Self {
            state_breeds,
            coastal_states,
        }
    }

    /// Locally adapted breed advice, falling back to crossbreds
    pub fn breed_for(&self, state: &str) -> &str {
        let state = state.trim();
        self.state_breeds
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(state))
            .map(|(_, breed)| breed.as_str())
            .unwrap_or(DEFAULT_BREED_SUGGESTION)
    }

    pub fn is_coastal(&self, state: &str) -> bool {
        let state = state.trim();
        !state.is_empty() && self.coastal_states.iter().any(|s| s.eq_ignore_ascii_case(state))
    }
}

impl Default for RegionProfile {
    fn default() -> Self {
        let state_breeds = [
            ("Maharashtra", "Khillari (draught), Deoni (dairy)"),
            ("Punjab", "Sahiwal (dairy)"),
            ("Gujarat", "Gir (dairy)"),
            ("Uttar Pradesh", "Gangartiri (dairy)"),
            ("Rajasthan", "Tharparkar, Rathi (dairy)"),
        ]
        .into_iter()
        .map(|(state, breed)| (state.to_string(), breed.to_string()))
        .collect();

        let coastal_states = [
            "Maharashtra",
            "Gujarat",
            "Kerala",
            "Tamil Nadu",
            "Andhra Pradesh",
            "Odisha",
            "West Bengal",
            "Goa",
            "Karnataka",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self::new(state_breeds, coastal_states)
    }
}

const POULTRY_RATIONALE: &str = "Highly profitable and adaptable to various climates with proper housing. A great source of secondary income.";
const GOAT_RATIONALE: &str = "Goats are highly resilient, require less water than cattle, and are well-suited for semi-arid and arid regions. They are excellent for small-scale farmers.";
const AQUACULTURE_RATIONALE: &str = "Excellent potential in areas with high water abundance or in coastal regions. Farm ponds can be used for freshwater fish like Catla and Rohu.";

/// Suggestions that hold without any climate data: poultry everywhere,
/// aquaculture along the coast.
pub fn baseline_livestock(region: &RegionProfile, state: &str) -> LivestockSuggestions {
    let mut suggestions = LivestockSuggestions::new();
    suggestions.insert(LivestockActivity::Poultry, POULTRY_RATIONALE.to_string());
    if region.is_coastal(state) {
        suggestions.insert(LivestockActivity::Aquaculture, AQUACULTURE_RATIONALE.to_string());
    }
    suggestions
}

/// Derive livestock suggestions from rainfall, water availability and state.
///
/// Rules only ever add entries.
pub fn recommend_livestock(
    region: &RegionProfile,
    state: &str,
    summary: &ClimateSummary,
    water: &WaterProfile,
) -> LivestockSuggestions {
    let mut suggestions = baseline_livestock(region, state);

    if summary.annual_rainfall_mm < GOAT_RAINFALL_CEILING_MM {
        suggestions.insert(LivestockActivity::GoatFarming, GOAT_RATIONALE.to_string());
    }

    if water.water_abundance.supports_dairy() {
        suggestions.insert(
            LivestockActivity::DairyCattle,
            format!(
                "Suitable due to medium to high water availability. Focus on locally adapted breeds like {} for better productivity and disease resistance.",
                region.breed_for(state)
            ),
        );
    }

    if water.water_abundance == WaterAbundance::High {
        suggestions.insert(LivestockActivity::Aquaculture, AQUACULTURE_RATIONALE.to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::water::classify_water;

    fn suggest(state: &str, rainfall: f64) -> LivestockSuggestions {
        let summary = ClimateSummary::new(25.0, rainfall, 60.0);
        recommend_livestock(&RegionProfile::default(), state, &summary, &classify_water(rainfall))
    }

    #[test]
    fn test_poultry_always_suggested() {
        for rainfall in [0.0, 700.0, 2000.0] {
            assert!(suggest("Bihar", rainfall).contains_key(&LivestockActivity::Poultry));
        }
    }

    #[test]
    fn test_dry_inland_state() {
        let s = suggest("Rajasthan", 0.0);
        assert!(s.contains_key(&LivestockActivity::GoatFarming));
        assert!(!s.contains_key(&LivestockActivity::DairyCattle));
        assert!(!s.contains_key(&LivestockActivity::Aquaculture));
    }

    #[test]
    fn test_dairy_uses_state_breed() {
        let s = suggest("Punjab", 700.0);
        assert!(s[&LivestockActivity::DairyCattle].contains("Sahiwal (dairy)"));
    }

    #[test]
    fn test_dairy_breed_lookup_ignores_case() {
        let s = suggest("punjab", 700.0);
        assert!(s[&LivestockActivity::DairyCattle].contains("Sahiwal (dairy)"));
    }

    #[test]
    fn test_dairy_falls_back_to_crossbreds() {
        let s = suggest("Bihar", 700.0);
        assert!(s[&LivestockActivity::DairyCattle].contains(DEFAULT_BREED_SUGGESTION));
    }

    #[test]
    fn test_aquaculture_for_coastal_or_wet() {
        assert!(suggest("Kerala", 0.0).contains_key(&LivestockActivity::Aquaculture));
        assert!(suggest("Assam", 1500.0).contains_key(&LivestockActivity::Aquaculture));
        assert!(!suggest("Assam", 1100.0).contains_key(&LivestockActivity::Aquaculture));
    }

    #[test]
    fn test_goat_boundary() {
        assert!(suggest("Bihar", 799.99).contains_key(&LivestockActivity::GoatFarming));
        assert!(!suggest("Bihar", 800.0).contains_key(&LivestockActivity::GoatFarming));
    }

    #[test]
    fn test_baseline_without_state() {
        let s = baseline_livestock(&RegionProfile::default(), "");
        assert_eq!(s.len(), 1);
        assert!(s.contains_key(&LivestockActivity::Poultry));
    }

    #[test]
    fn test_serialized_activity_names() {
        let json = serde_json::to_value(suggest("Gujarat", 700.0)).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert!(keys.contains(&&"Poultry (Broilers and Layers)".to_string()));
        assert!(keys.contains(&&"Goat Farming".to_string()));
        assert!(keys.contains(&&"Dairy Cattle".to_string()));
        assert!(keys.contains(&&"Aquaculture/Fisheries".to_string()));
    }
}

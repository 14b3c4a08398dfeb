//! Extreme weather alerts from WMO weather codes

use serde::{Deserialize, Serialize};

/// Alert raised for a severe current weather code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherAlert {
    pub weather_code: i32,
    pub message: String,
}

/// WMO weather interpretation codes treated as extreme
const EXTREME_CODES: [(i32, &str); 3] = [
    (95, "Thunderstorm"),
    (96, "Thunderstorm with hail"),
    (99, "Severe Thunderstorm"),
];

/// Alerts for a weather code; empty for anything not extreme
pub fn extreme_alerts(weather_code: i32) -> Vec<WeatherAlert> {
    EXTREME_CODES
        .iter()
        .filter(|(code, _)| *code == weather_code)
        .map(|(code, message)| WeatherAlert {
            weather_code: *code,
            message: message.to_string(),
        })
        .collect()
}

//! Climate data models and the daily-series reduction

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::round2;

/// Canonical trailing window, in days, for climate summaries.
///
/// A full year keeps the summed rainfall comparable with the annual
/// thresholds in the crop requirements table.
pub const DEFAULT_HISTORY_DAYS: u32 = 365;

/// Summary statistics over a trailing window of daily observations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClimateSummary {
    pub average_temperature_celsius: f64,
    pub annual_rainfall_mm: f64,
    pub humidity_percent: f64,
    pub window_days: u32,
}

impl ClimateSummary {
    pub fn new(
        average_temperature_celsius: f64,
        annual_rainfall_mm: f64,
        humidity_percent: f64,
    ) -> Self {
        Self {
            average_temperature_celsius,
            annual_rainfall_mm,
            humidity_percent,
            window_days: DEFAULT_HISTORY_DAYS,
        }
    }
}

/// Daily observations as returned by a weather archive.
///
/// Archives report `null` for days they have not processed yet, so every
/// value is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailySeries {
    pub dates: Vec<String>,
    pub temperature_max_celsius: Vec<Option<f64>>,
    pub temperature_min_celsius: Vec<Option<f64>>,
    pub precipitation_sum_mm: Vec<Option<f64>>,
}

/// Instantaneous conditions at a point
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub weather_code: Option<i32>,
}

/// Reasons a daily series cannot be summarised
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error(
        "daily arrays have mismatched lengths (max={max}, min={min}, precipitation={precipitation})"
    )]
    MismatchedLengths {
        max: usize,
        min: usize,
        precipitation: usize,
    },

    #[error("no usable daily observations in the window")]
    Empty,

    #[error("current humidity reading is missing")]
    MissingHumidity,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.temperature_max_celsius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature_max_celsius.is_empty()
    }

    /// Reduce the series to a [`ClimateSummary`].
    ///
    /// Rainfall is the sum of every reported precipitation value. Temperature
    /// is the mean of the daily midpoints `(max + min) / 2` over days that
    /// report both extremes. Both are rounded to two decimals.
    pub fn summarize(
        &self,
        humidity_percent: Option<f64>,
        window_days: u32,
    ) -> Result<ClimateSummary, SeriesError> {
        let (max, min, precipitation) = (
            self.temperature_max_celsius.len(),
            self.temperature_min_celsius.len(),
            self.precipitation_sum_mm.len(),
        );
        if max != min || max != precipitation {
            return Err(SeriesError::MismatchedLengths {
                max,
                min,
                precipitation,
            });
        }

        let midpoints: Vec<f64> = self
            .temperature_max_celsius
            .iter()
            .zip(&self.temperature_min_celsius)
            .filter_map(|(hi, lo)| match (hi, lo) {
                (Some(hi), Some(lo)) => Some((hi + lo) / 2.0),
                _ => None,
            })
            .collect();

        if midpoints.is_empty() {
            return Err(SeriesError::Empty);
        }

        let humidity = humidity_percent
            .filter(|h| h.is_finite())
            .ok_or(SeriesError::MissingHumidity)?;

        let rainfall: f64 = self.precipitation_sum_mm.iter().flatten().sum();
        let average = midpoints.iter().sum::<f64>() / midpoints.len() as f64;

        Ok(ClimateSummary {
            average_temperature_celsius: round2(average),
            annual_rainfall_mm: round2(rainfall.max(0.0)),
            humidity_percent: humidity.clamp(0.0, 100.0),
            window_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(max: &[f64], min: &[f64], rain: &[f64]) -> DailySeries {
        DailySeries {
            dates: (0..max.len()).map(|i| format!("2026-01-{:02}", i + 1)).collect(),
            temperature_max_celsius: max.iter().copied().map(Some).collect(),
            temperature_min_celsius: min.iter().copied().map(Some).collect(),
            precipitation_sum_mm: rain.iter().copied().map(Some).collect(),
        }
    }

    #[test]
    fn test_summarize_midpoint_mean_and_rain_sum() {
        let s = series(&[30.0, 32.0], &[20.0, 18.0], &[10.5, 4.25]);
        let summary = s.summarize(Some(64.0), 2).unwrap();
        assert_eq!(summary.average_temperature_celsius, 25.0);
        assert_eq!(summary.annual_rainfall_mm, 14.75);
        assert_eq!(summary.humidity_percent, 64.0);
        assert_eq!(summary.window_days, 2);
    }

    #[test]
    fn test_summarize_rounds_to_two_places() {
        let s = series(&[30.0, 30.0, 31.0], &[20.0, 20.0, 20.0], &[0.333, 0.333, 0.333]);
        let summary = s.summarize(Some(50.0), 3).unwrap();
        assert_eq!(summary.average_temperature_celsius, 25.17);
        assert_eq!(summary.annual_rainfall_mm, 1.0);
    }

    #[test]
    fn test_summarize_skips_incomplete_days() {
        let s = DailySeries {
            dates: vec!["a".into(), "b".into(), "c".into()],
            temperature_max_celsius: vec![Some(30.0), None, Some(28.0)],
            temperature_min_celsius: vec![Some(20.0), Some(19.0), Some(22.0)],
            precipitation_sum_mm: vec![Some(5.0), Some(2.0), None],
        };
        let summary = s.summarize(Some(70.0), 3).unwrap();
        assert_eq!(summary.average_temperature_celsius, 25.0);
        assert_eq!(summary.annual_rainfall_mm, 7.0);
    }

    #[test]
    fn test_summarize_empty_window() {
        let s = DailySeries::default();
        assert_eq!(s.summarize(Some(50.0), 365), Err(SeriesError::Empty));
    }

    #[test]
    fn test_summarize_all_null_window() {
        let s = DailySeries {
            dates: vec!["a".into()],
            temperature_max_celsius: vec![None],
            temperature_min_celsius: vec![None],
            precipitation_sum_mm: vec![None],
        };
        assert_eq!(s.summarize(Some(50.0), 1), Err(SeriesError::Empty));
    }

    #[test]
    fn test_summarize_mismatched_lengths() {
        let s = series(&[30.0, 31.0], &[20.0], &[1.0, 2.0]);
        assert!(matches!(
            s.summarize(Some(50.0), 2),
            Err(SeriesError::MismatchedLengths { max: 2, min: 1, precipitation: 2 })
        ));
    }

    #[test]
    fn test_summarize_requires_humidity() {
        let s = series(&[30.0], &[20.0], &[1.0]);
        assert_eq!(s.summarize(None, 1), Err(SeriesError::MissingHumidity));
    }

    #[test]
    fn test_humidity_is_clamped() {
        let s = series(&[30.0], &[20.0], &[1.0]);
        assert_eq!(s.summarize(Some(104.0), 1).unwrap().humidity_percent, 100.0);
    }
}

//! Common types used across the platform

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Indian Standard Time, UTC+05:30
pub const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// A point on the earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Round to two decimal places, the precision reported for climate figures
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calendar date in India at the given instant
pub fn india_date(instant: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(IST_OFFSET_SECONDS) {
        Some(ist) => instant.with_timezone(&ist).date_naive(),
        None => instant.date_naive(),
    }
}

/// Calendar date in India right now
pub fn today_in_india() -> NaiveDate {
    india_date(Utc::now())
}

/// Inclusive `(start, end)` dates of a trailing window of complete days.
///
/// The window ends yesterday so archives are not asked for a partial day.
pub fn trailing_window(today: NaiveDate, window_days: u32) -> (NaiveDate, NaiveDate) {
    let end = today - Duration::days(1);
    let start = end - Duration::days(i64::from(window_days.max(1)) - 1);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_window() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let (start, end) = trailing_window(today, 365);
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 10, 17).unwrap());
        assert_eq!((end - start).num_days() + 1, 365);

        let (start, end) = trailing_window(today, 1);
        assert_eq!(start, end);
    }

    #[test]
    fn test_india_date_crosses_midnight_before_utc() {
        let evening_utc = DateTime::parse_from_rfc3339("2026-10-16T18:29:59Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(india_date(evening_utc), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        let after_ist_midnight = evening_utc + Duration::seconds(1);
        assert_eq!(
            india_date(after_ist_midnight),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(25.004), 25.0);
        assert_eq!(round2(699.999), 700.0);
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_geo_point_display() {
        let pune = GeoPoint::new(18.52, 73.85);
        assert_eq!(pune.to_string(), "(18.5200, 73.8500)");
    }
}

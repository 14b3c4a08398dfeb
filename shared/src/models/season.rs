//! Indian agricultural seasons

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The three principal cropping seasons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon-sown, June to September
    Kharif,
    /// Winter-sown, October to February
    Rabi,
    /// Summer-sown, March to May
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    /// Season active in a calendar month (1-12); `None` outside that range
    pub fn from_month(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then(|| Self::from_valid_month(month))
    }

    /// Season active on a date
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_valid_month(date.month())
    }

    // Rabi wraps the year end: Oct, Nov, Dec, Jan, Feb.
    fn from_valid_month(month: u32) -> Self {
        match month {
            6..=9 => Season::Kharif,
            3..=5 => Season::Zaid,
            _ => Season::Rabi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Season {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kharif" => Ok(Season::Kharif),
            "rabi" => Ok(Season::Rabi),
            "zaid" => Ok(Season::Zaid),
            _ => Err("Unknown season"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_mapping() {
        for month in [6, 7, 8, 9] {
            assert_eq!(Season::from_month(month), Some(Season::Kharif));
        }
        for month in [10, 11, 12, 1, 2] {
            assert_eq!(Season::from_month(month), Some(Season::Rabi));
        }
        for month in [3, 4, 5] {
            assert_eq!(Season::from_month(month), Some(Season::Zaid));
        }
    }

    #[test]
    fn test_october_to_december_is_rabi() {
        // The year-end months must not fall through to zaid
        assert_eq!(Season::from_month(10), Some(Season::Rabi));
        assert_eq!(Season::from_month(12), Some(Season::Rabi));
    }

    #[test]
    fn test_out_of_range_month() {
        assert_eq!(Season::from_month(0), None);
        assert_eq!(Season::from_month(13), None);
    }

    #[test]
    fn test_for_date() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
        assert_eq!(Season::for_date(date), Season::Kharif);
        let date = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
        assert_eq!(Season::for_date(date), Season::Rabi);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Kharif".parse::<Season>(), Ok(Season::Kharif));
        assert!("monsoon".parse::<Season>().is_err());
        assert_eq!(Season::Zaid.to_string(), "zaid");
    }
}

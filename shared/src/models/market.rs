//! Mandi (wholesale market) price models

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One day's arrival price at a market, as published on data.gov.in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPriceRecord {
    #[serde(rename(deserialize = "State"), alias = "state", default)]
    pub state: String,
    #[serde(rename(deserialize = "District"), alias = "district", default)]
    pub district: String,
    #[serde(rename(deserialize = "Market"), alias = "market", default)]
    pub market: String,
    #[serde(rename(deserialize = "Commodity"), alias = "commodity", default)]
    pub commodity: String,
    #[serde(rename(deserialize = "Variety"), alias = "variety", default)]
    pub variety: String,
    #[serde(rename(deserialize = "Grade"), alias = "grade", default)]
    pub grade: String,
    #[serde(rename(deserialize = "Arrival_Date"), alias = "arrival_date", default)]
    pub arrival_date: String,
    /// Rupees per quintal
    #[serde(
        rename(deserialize = "Min_Price"),
        alias = "min_price",
        default,
        deserialize_with = "lenient_decimal"
    )]
    pub min_price: Option<Decimal>,
    #[serde(
        rename(deserialize = "Max_Price"),
        alias = "max_price",
        default,
        deserialize_with = "lenient_decimal"
    )]
    pub max_price: Option<Decimal>,
    #[serde(
        rename(deserialize = "Modal_Price"),
        alias = "modal_price",
        default,
        deserialize_with = "lenient_decimal"
    )]
    pub modal_price: Option<Decimal>,
}

// The dataset publishes prices as strings, sometimes as numbers, and
// occasionally as "NA".
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        Some(serde_json::Value::Number(n)) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    })
}

/// Market price lookup parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPriceQuery {
    pub crop: String,
    pub state: String,
    pub district: String,
    pub arrival_date: NaiveDate,
}

impl MarketPriceQuery {
    /// Arrival date in the dataset's `dd/mm/YYYY` filter format
    pub fn arrival_date_param(&self) -> String {
        self.arrival_date.format("%d/%m/%Y").to_string()
    }
}

/// Prices of one crop across a district's markets on one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPriceReport {
    pub crop: String,
    pub state: String,
    pub district: String,
    pub arrival_date: NaiveDate,
    pub records: Vec<MarketPriceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Keep records whose commodity mentions the crop, ignoring case
pub fn filter_by_commodity(records: Vec<MarketPriceRecord>, crop: &str) -> Vec<MarketPriceRecord> {
    let needle = crop.trim().to_lowercase();
    records
        .into_iter()
        .filter(|r| r.commodity.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_record() {
        let json = r#"{
            "State": "Maharashtra", "District": "Pune", "Market": "Pune(Moshi)",
            "Commodity": "Onion", "Variety": "Red", "Grade": "FAQ",
            "Arrival_Date": "16/10/2026", "Min_Price": "1500", "Max_Price": 2200,
            "Modal_Price": "NA"
        }"#;
        let record: MarketPriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.commodity, "Onion");
        assert_eq!(record.min_price, Some(Decimal::from(1500)));
        assert_eq!(record.max_price, Some(Decimal::from(2200)));
        assert_eq!(record.modal_price, None);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let make = |commodity: &str| MarketPriceRecord {
            state: String::new(),
            district: String::new(),
            market: String::new(),
            commodity: commodity.to_string(),
            variety: String::new(),
            grade: String::new(),
            arrival_date: String::new(),
            min_price: None,
            max_price: None,
            modal_price: None,
        };
        let records = vec![make("Onion"), make("Onion Green"), make("Tomato")];
        let kept = filter_by_commodity(records, "onion");
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_arrival_date_param() {
        let query = MarketPriceQuery {
            crop: "onion".into(),
            state: "Maharashtra".into(),
            district: "Pune".into(),
            arrival_date: NaiveDate::from_ymd_opt(2026, 10, 6).unwrap(),
        };
        assert_eq!(query.arrival_date_param(), "06/10/2026");
    }
}

//! External API integrations
//!
//! Each upstream sits behind a trait so the pipeline can be driven by
//! in-memory fakes in tests.

use async_trait::async_trait;
use shared::{
    CurrentConditions, DailySeries, GeoPoint, Location, MarketPriceQuery, MarketPriceRecord,
};

use crate::error::AppResult;

pub mod geocoding;
pub mod market;
pub mod weather;

pub use geocoding::OpenMeteoGeocoder;
pub use market::DataGovMarketClient;
pub use weather::OpenMeteoClient;

/// Resolves a free-text place name to a location
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` when the service has no match for the query
    async fn resolve(&self, query: &str) -> AppResult<Option<Location>>;
}

/// Source of daily climate history and current conditions
#[async_trait]
pub trait ClimateSource: Send + Sync {
    /// Daily max/min temperature and precipitation for the trailing window
    async fn daily_history(&self, point: GeoPoint, window_days: u32) -> AppResult<DailySeries>;

    /// Conditions at the time of the request
    async fn current(&self, point: GeoPoint) -> AppResult<CurrentConditions>;
}

/// Paged access to the daily mandi price dataset
#[async_trait]
pub trait MarketPriceSource: Send + Sync {
    async fn fetch_page(
        &self,
        query: &MarketPriceQuery,
        offset: u32,
        limit: u32,
    ) -> AppResult<Vec<MarketPriceRecord>>;
}

//! HTTP handlers

pub mod advisory;
pub mod health;
pub mod market;
pub mod weather;

pub use advisory::create_advisory;
pub use health::health_check;
pub use market::get_market_prices;
pub use weather::get_current_conditions;

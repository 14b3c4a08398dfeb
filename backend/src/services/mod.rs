//! Business logic services for the Krishi Advisor platform

pub mod advisory;
pub mod climate;
pub mod conditions;
pub mod market;

pub use advisory::AdvisoryService;
pub use climate::ClimateService;
pub use conditions::{ConditionsReport, ConditionsService};
pub use market::MarketService;

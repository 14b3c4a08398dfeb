//! Domain models for the Krishi Advisor platform

mod alerts;
mod analysis;
mod climate;
mod crop;
mod livestock;
mod location;
mod market;
mod season;
mod water;

pub use alerts::*;
pub use analysis::*;
pub use climate::*;
pub use crop::*;
pub use livestock::*;
pub use location::*;
pub use market::*;
pub use season::*;
pub use water::*;

//! Shared types and agronomic rules for the Krishi Advisor platform
//!
//! This crate contains the domain models and every deterministic
//! recommendation rule, shared between the backend, the browser client
//! (via WASM), and other components of the system. Nothing here performs I/O.

pub mod models;
pub mod reference;
pub mod types;
pub mod validation;

pub use models::*;
pub use reference::*;
pub use types::*;
pub use validation::*;

//! BMI Calculator Shared Library
//!
//! This crate contains the BMI calculator, weight categories, error types
//! and wire types used by the backend and WASM modules.

pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
pub use validation::parse_measurement;

//! Business logic services
//!
//! Services coordinate the calculator on behalf of the HTTP layer.

pub mod bmi;

pub use bmi::BmiService;

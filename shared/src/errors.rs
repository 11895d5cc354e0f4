//! Error types for the BMI calculator

use thiserror::Error;

/// Errors raised while turning a request into a BMI result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BmiError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid measurement: weight and height must be positive numbers")]
    InvalidMeasurement,
}

impl BmiError {
    /// Short machine-readable name, used as a metrics label
    pub fn kind(&self) -> &'static str {
        match self {
            BmiError::MalformedRequest(_) => "malformed_request",
            BmiError::InvalidMeasurement => "invalid_measurement",
        }
    }
}

//! API request/response types
//!
//! Wire types shared between the backend and any client.

use crate::health_metrics::WeightCategory;
use serde::{Deserialize, Serialize};

/// Prefix for every error message returned by the BMI endpoint
pub const ERROR_PREFIX: &str = "Error calculating BMI";

/// Successful BMI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResponse {
    /// BMI rounded to two decimal places
    pub bmi: f64,
    pub weight_category: WeightCategory,
}

/// Error body returned for any failed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Build an error body from a failure message
    pub fn calculation_failed(message: impl std::fmt::Display) -> Self {
        Self {
            error: format!("{}: {}", ERROR_PREFIX, message),
        }
    }
}

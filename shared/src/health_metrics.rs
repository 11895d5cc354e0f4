//! BMI calculations module
//!
//! Provides the BMI formula, weight category classification and the
//! `BmiCalculator` trait the backend service is built on.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **SI Units**: Weight in kilograms, height in meters
//! 3. **Substitutable**: Services depend on the trait, not the struct

use crate::errors::BmiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places a BMI value is reported with
pub const BMI_DECIMAL_PLACES: usize = 2;

// ============================================================================
// Measurement
// ============================================================================

/// Weight and height as supplied by a single request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
}

impl Measurement {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

// ============================================================================
// Weight Categories
// ============================================================================

/// Weight category derived from a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl WeightCategory {
    /// Get the human-readable label, as sent to clients
    pub fn label(&self) -> &'static str {
        match self {
            WeightCategory::Underweight => "Underweight",
            WeightCategory::NormalWeight => "Normal weight",
            WeightCategory::Overweight => "Overweight",
            WeightCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which set of thresholds to classify BMI values with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryBands {
    /// Historical thresholds: 18.5 / 24.9 / 25 / 29.9.
    /// Values in [24.9, 25) are reported as Obese.
    #[default]
    Literal,
    /// WHO adult bands: 18.5 / 25 / 30
    Who,
}

impl CategoryBands {
    /// Classify a BMI value with this set of thresholds
    pub fn classify(&self, bmi: f64) -> WeightCategory {
        match self {
            CategoryBands::Literal => determine_weight_category(bmi),
            CategoryBands::Who => classify_who_bands(bmi),
        }
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// Round to a number of decimal places
///
/// Rounds the exact binary value of `value`: 7.525 is stored as
/// 7.52500000000000035... and goes up to 7.53.
pub fn round_to_places(value: f64, places: usize) -> Option<f64> {
    format!("{:.*}", places, value).parse().ok()
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)², rounded to 2 decimal places.
/// NaN inputs are rejected along with non-positive ones.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<f64, BmiError> {
    if !(weight_kg > 0.0 && height_m > 0.0) {
        return Err(BmiError::InvalidMeasurement);
    }
    let bmi = weight_kg / (height_m * height_m);
    round_to_places(bmi, BMI_DECIMAL_PLACES).ok_or(BmiError::InvalidMeasurement)
}

/// Classify BMI into a weight category using the literal thresholds
///
/// Anything not caught by the first three bands is Obese, including
/// [24.9, 25) and NaN.
pub fn determine_weight_category(bmi: f64) -> WeightCategory {
    if bmi < 18.5 {
        WeightCategory::Underweight
    } else if bmi >= 18.5 && bmi < 24.9 {
        WeightCategory::NormalWeight
    } else if bmi >= 25.0 && bmi < 29.9 {
        WeightCategory::Overweight
    } else {
        WeightCategory::Obese
    }
}

/// Classify BMI into a weight category using the WHO adult bands
pub fn classify_who_bands(bmi: f64) -> WeightCategory {
    if bmi < 18.5 {
        WeightCategory::Underweight
    } else if bmi < 25.0 {
        WeightCategory::NormalWeight
    } else if bmi < 30.0 {
        WeightCategory::Overweight
    } else {
        WeightCategory::Obese
    }
}

// ============================================================================
// Calculator Abstraction
// ============================================================================

/// BMI calculator capability
///
/// Implementations must be pure: identical inputs give identical outputs.
pub trait BmiCalculator: Send + Sync {
    /// Compute a rounded BMI value, rejecting non-positive measurements
    fn calculate_bmi(&self, weight_kg: f64, height_m: f64) -> Result<f64, BmiError>;

    /// Map a BMI value to a weight category
    fn determine_weight_category(&self, bmi: f64) -> WeightCategory;
}

/// Calculator backed by the standard formula and a configurable band set
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBmiCalculator {
    bands: CategoryBands,
}

impl StandardBmiCalculator {
    pub fn new(bands: CategoryBands) -> Self {
        Self { bands }
    }
}

impl BmiCalculator for StandardBmiCalculator {
    fn calculate_bmi(&self, weight_kg: f64, height_m: f64) -> Result<f64, BmiError> {
        calculate_bmi(weight_kg, height_m)
    }

    fn determine_weight_category(&self, bmi: f64) -> WeightCategory {
        self.bands.classify(bmi)
    }
}

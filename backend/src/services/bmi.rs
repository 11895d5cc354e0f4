//! BMI service
//!
//! Runs the injected calculator in sequence: BMI first, then the weight
//! category for that BMI.

use bmi_shared::{BmiCalculator, BmiError, WeightCategory};
use std::sync::Arc;

/// BMI orchestration service
#[derive(Clone)]
pub struct BmiService {
    calculator: Arc<dyn BmiCalculator>,
}

impl BmiService {
    pub fn new(calculator: Arc<dyn BmiCalculator>) -> Self {
        Self { calculator }
    }

    /// Calculate BMI and weight category
    ///
    /// Calculator errors are returned unchanged.
    pub fn calculate_bmi_and_category(
        &self,
        weight_kg: f64,
        height_m: f64,
    ) -> Result<(f64, WeightCategory), BmiError> {
        let bmi = self.calculator.calculate_bmi(weight_kg, height_m)?;
        let weight_category = self.calculator.determine_weight_category(bmi);
        Ok((bmi, weight_category))
    }
}

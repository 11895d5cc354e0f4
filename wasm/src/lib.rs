//! BMI Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so the browser can compute
//! the same BMI values and categories as the backend.

use bmi_shared::health_metrics;
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (m)
///
/// Returns `undefined` when either value is not positive.
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Option<f64> {
    health_metrics::calculate_bmi(weight_kg, height_m).ok()
}

/// Weight category label for a BMI value
#[wasm_bindgen]
pub fn determine_weight_category(bmi: f64) -> String {
    health_metrics::determine_weight_category(bmi)
        .label()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        assert_eq!(calculate_bmi(70.0, 1.75), Some(22.86));
        assert_eq!(calculate_bmi(70.0, 0.0), None);
        assert_eq!(calculate_bmi(-5.0, 1.70), None);
    }

    #[test]
    fn test_category() {
        assert_eq!(determine_weight_category(22.86), "Normal weight");
        assert_eq!(determine_weight_category(31.14), "Obese");
    }
}

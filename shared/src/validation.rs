//! Input validation functions
//!
//! Turns a decoded JSON request body into a `Measurement`. Values may be
//! JSON numbers or numeric strings. Positivity is checked by the
//! calculator, not here.

use crate::errors::BmiError;
use crate::health_metrics::Measurement;
use serde_json::Value;

/// Extract weight and height from a JSON request body
pub fn parse_measurement(body: &Value) -> Result<Measurement, BmiError> {
    let object = body.as_object().ok_or_else(|| {
        BmiError::MalformedRequest("request body must be a JSON object".to_string())
    })?;

    let weight_kg = parse_numeric_field("weight", object.get("weight"))?;
    let height_m = parse_numeric_field("height", object.get("height"))?;

    Ok(Measurement::new(weight_kg, height_m))
}

/// Convert a single field to a finite f64
pub fn parse_numeric_field(field: &str, value: Option<&Value>) -> Result<f64, BmiError> {
    let value = value.ok_or_else(|| BmiError::MalformedRequest(format!("missing field `{}`", field)))?;

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        BmiError::MalformedRequest(format!(
            "field `{}` must be a number or numeric string",
            field
        ))
    })?;

    if !number.is_finite() {
        return Err(BmiError::MalformedRequest(format!(
            "field `{}` must be a finite number",
            field
        )));
    }

    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_parse_numbers() {
        let measurement = parse_measurement(&json!({"weight": 70, "height": 1.75})).unwrap();
        assert_eq!(measurement, Measurement::new(70.0, 1.75));
    }

    #[test]
    fn test_parse_numeric_strings() {
        let measurement = parse_measurement(&json!({"weight": "70", "height": " 1.75 "})).unwrap();
        assert_eq!(measurement, Measurement::new(70.0, 1.75));
    }

    #[test]
    fn test_negative_values_pass_through() {
        // Positivity is the calculator's job
        let measurement = parse_measurement(&json!({"weight": -5, "height": 1.7})).unwrap();
        assert_eq!(measurement.weight_kg, -5.0);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let measurement =
            parse_measurement(&json!({"weight": 80, "height": 1.78, "unit": "metric"})).unwrap();
        assert_eq!(measurement, Measurement::new(80.0, 1.78));
    }

    #[rstest]
    #[case(json!({}), "missing field `weight`")]
    #[case(json!({"weight": 70}), "missing field `height`")]
    #[case(json!({"weight": "abc", "height": 1.75}), "field `weight` must be a number or numeric string")]
    #[case(json!({"weight": 70, "height": true}), "field `height` must be a number or numeric string")]
    #[case(json!({"weight": null, "height": 1.75}), "field `weight` must be a number or numeric string")]
    #[case(json!({"weight": "NaN", "height": 1.75}), "field `weight` must be a finite number")]
    #[case(json!({"weight": 70, "height": "inf"}), "field `height` must be a finite number")]
    #[case(json!([70, 1.75]), "request body must be a JSON object")]
    #[case(json!(null), "request body must be a JSON object")]
    fn test_malformed_bodies(#[case] body: Value, #[case] message: &str) {
        assert_eq!(
            parse_measurement(&body),
            Err(BmiError::MalformedRequest(message.to_string()))
        );
    }
}

//! BMI calculation API routes

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use bmi_shared::{parse_measurement, BmiResponse};
use serde_json::Value;
use tracing::{debug, info};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new().route("/", post(calculate_bmi))
}

/// POST /api/v1/bmi - Calculate BMI and weight category
///
/// Accepts `weight` (kg) and `height` (m) as numbers or numeric strings.
/// Any failure, including an undecodable body, is reported as a 500.
pub async fn calculate_bmi(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<BmiResponse>> {
    let Json(body) = payload?;
    let measurement = parse_measurement(&body)?;

    info!(
        weight = measurement.weight_kg,
        height = measurement.height_m,
        "Received BMI request"
    );

    let (bmi, weight_category) = state
        .bmi()
        .calculate_bmi_and_category(measurement.weight_kg, measurement.height_m)?;

    info!(bmi, weight_category = %weight_category, "Calculated BMI");
    metrics::counter!("bmi_calculations_total", "category" => weight_category.label())
        .increment(1);

    let response = BmiResponse {
        bmi,
        weight_category,
    };
    debug!(response = ?response, "Response data");

    Ok(Json(response))
}

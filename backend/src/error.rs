//! Application error handling
//!
//! Every failure on the BMI endpoint is reported the same way: HTTP 500
//! with an `{"error": "Error calculating BMI: ..."}` body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bmi_shared::{BmiError, ErrorResponse};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Bmi(#[from] BmiError),

    /// The body could not be decoded as JSON at all
    #[error("Malformed request: {}", .0.body_text())]
    Rejected(#[from] JsonRejection),
}

impl ApiError {
    /// Short machine-readable name, used as a metrics label
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Bmi(err) => err.kind(),
            ApiError::Rejected(_) => "malformed_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(kind = self.kind(), "An error occurred: {}", self);
        metrics::counter!("bmi_calculation_errors_total", "kind" => self.kind()).increment(1);

        let body = Json(ErrorResponse::calculation_failed(&self));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

//! Unified error response handling for the generation API
//!
//! Maps domain failures onto a standardized error body so every handler
//! reports rejections the same way.

use crate::domain::generator::GeneratorError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("no generated records available for download")]
    NoGeneratedRecords,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Generator(GeneratorError::Configuration { .. })
            | Self::Generator(GeneratorError::DegenerateStep { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Generator(GeneratorError::RandomSource(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NoGeneratedRecords => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Generator(GeneratorError::Configuration { .. }) => "INVALID_CONFIGURATION",
            Self::Generator(GeneratorError::DegenerateStep { .. }) => "DEGENERATE_STEP",
            Self::Generator(GeneratorError::RandomSource(_)) => "RANDOM_SOURCE_FAILURE",
            Self::NoGeneratedRecords => "NO_GENERATED_RECORDS",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(self.code(), self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_unprocessable() {
        let error = ApiError::from(GeneratorError::configuration("quantity must be positive"));
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn degenerate_step_has_its_own_code() {
        let error = ApiError::from(GeneratorError::DegenerateStep {
            quantity: 5,
            num_records: 10,
        });
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.code(), "DEGENERATE_STEP");
    }

    #[test]
    fn missing_result_is_not_found() {
        let error = ApiError::NoGeneratedRecords;
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.code(), "NO_GENERATED_RECORDS");
    }
}

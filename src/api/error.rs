//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use uuid::Uuid;

use crate::model::ClaimValidationError;
use crate::service::ClaimAnalysisError;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Claim input failed validation (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The analysis service could not be reached (502)
    #[error("Analysis service error: {0}")]
    ExternalService(String),

    /// The analysis service replied without a payload (502)
    #[error("Analysis service returned an empty response")]
    EmptyUpstreamResponse,

    /// The analysis service reply failed schema validation (502)
    #[error("Analysis service returned a malformed response: {0}")]
    MalformedUpstreamResponse(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ExternalService(_)
            | ApiError::EmptyUpstreamResponse
            | ApiError::MalformedUpstreamResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::ExternalService(_) => "external_service_error",
            ApiError::EmptyUpstreamResponse => "empty_upstream_response",
            ApiError::MalformedUpstreamResponse(_) => "malformed_upstream_response",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<ClaimValidationError> for ApiError {
    fn from(err: ClaimValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ClaimAnalysisError> for ApiError {
    fn from(err: ClaimAnalysisError) -> Self {
        match err {
            ClaimAnalysisError::Transport(msg) => ApiError::ExternalService(msg),
            ClaimAnalysisError::EmptyResponse => ApiError::EmptyUpstreamResponse,
            ClaimAnalysisError::MalformedResponse(msg) => {
                ApiError::MalformedUpstreamResponse(msg)
            }
        }
    }
}

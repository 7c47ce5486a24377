//! API error handling.
//!
//! Only two error shapes leave this service: a 404 with the fixed
//! `Not found` body, and a generic 500 for storage faults.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::infrastructure::StoreError;

/// Fixed body for missing records.
const NOT_FOUND_MESSAGE: &str = "Not found";

/// Generic body for storage faults; the details stay in the logs.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// =============================================================================
// API Error
// =============================================================================

/// Error body for JSON responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// API Error Response
// =============================================================================

/// API error response containing status code and error body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new API error response.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates the 404 Not Found response with its fixed message.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::new(NOT_FOUND_MESSAGE))
    }

    /// Creates a 500 Internal Server Error response with a generic message.
    #[must_use]
    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new(INTERNAL_ERROR_MESSAGE),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<StoreError> for ApiErrorResponse {
    fn from(error: StoreError) -> Self {
        // Storage faults must not expose details to clients.
        tracing::error!(%error, "store operation failed");
        Self::internal_error()
    }
}

// =============================================================================
// Tests
// =============================================================================

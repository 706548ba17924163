// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::ValidationResult;
use crate::services::store::StoreError;

/// API error types
///
/// Clients only ever see fixed copy or validation-derived messages; raw
/// internal error text stays in the server logs.
#[derive(Debug)]
pub enum ApiError {
    /// A required secret is absent; the pipeline cannot run
    Configuration,
    /// Wrong HTTP verb on the submit endpoint
    MethodNotAllowed,
    /// The request body could not be read as a contact form payload
    BadRequest(String),
    /// One or more field constraints violated, joined into a display string
    Validation(String),
    /// The submission store rejected or failed the insert
    Persistence(StoreError),
    /// Anything else; detail is logged server-side only
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Configuration => write!(f, "Configuration Error: missing required secrets"),
            ApiError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            ApiError::Persistence(e) => write!(f, "Persistence Error: {}", e),
            ApiError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            ApiError::Configuration => {
                error!("Submit pipeline invoked without required secrets configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server is not configured".to_string(),
                )
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Persistence(e) => {
                error!(error = %e, "Submission store insert failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save submission".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "Unexpected error while handling submission");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message,
        };

        (status, Json(error_response)).into_response()
    }
}

/// Helper to convert a failed ValidationResult into an ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::Internal(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| e.message.clone())
                .collect();
            ApiError::Validation(error_messages.join(", "))
        }
    }
}

// src/logging_middleware.rs
//! Middleware for logging request bodies in debug mode

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::common::ApiError;

/// Bodies larger than this are passed through without being buffered;
/// this is a logging aid, not a size limit
const MAX_LOGGED_BODY_BYTES: usize = 64 * 1024;

/// Logs the request body at debug level before passing it on
///
/// Bodies with no declared length, or larger than the buffer cap, are
/// forwarded untouched and left to the handler's own validation.
pub async fn log_request_body(request: Request, next: Next) -> Response {
    let small_enough = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .map(|len| len <= MAX_LOGGED_BODY_BYTES)
        .unwrap_or(false);

    if !small_enough {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, MAX_LOGGED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        // The body cannot be replayed once the read failed
        Err(_) => {
            return ApiError::BadRequest("Failed to read request body".to_string())
                .into_response()
        }
    };

    if !bytes.is_empty() {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            // Pretty-print JSON bodies when they parse
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(body_str) {
                debug!(
                    method = %parts.method,
                    uri = %parts.uri,
                    request_body = %serde_json::to_string_pretty(&json).unwrap_or_else(|_| body_str.to_string()),
                    "Request"
                );
            } else {
                debug!(
                    method = %parts.method,
                    uri = %parts.uri,
                    request_body = %body_str,
                    "Request"
                );
            }
        }
    }

    // Reconstruct the request with the buffered body
    let request = Request::from_parts(parts, Body::from(bytes));
    next.run(request).await
}

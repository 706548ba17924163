// src/contact/cors.rs
//! Allow-list CORS policy for the public submit endpoint
//!
//! The allowed origin is echoed back only when it matches one of the
//! configured production/local origins exactly or carries the preview
//! hosting suffix. Disallowed origins get no allow-origin header at all.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::common::AppConfig;

/// Pure policy decision, keyed off the request's Origin value
pub fn is_allowed_origin(config: &AppConfig, origin: &str) -> bool {
    if config.allowed_origins.iter().any(|o| o == origin) {
        return true;
    }
    // Preview deployments get per-branch subdomains
    origin.ends_with(&config.preview_origin_suffix)
}

/// CORS layer enforcing the allow-list policy
///
/// `CorsLayer` echoes the Origin and emits `Vary: Origin` for allowed
/// requests, and answers pre-flight OPTIONS before the handler runs.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let config = config.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request_parts| {
                origin
                    .to_str()
                    .map(|o| is_allowed_origin(&config, o))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-client-info"),
            header::HeaderName::from_static("apikey"),
        ])
}

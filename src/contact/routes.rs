use super::handlers;
use axum::{routing::post, Router};

/// Creates the contact router
///
/// The explicit OPTIONS route answers plain pre-flights with an empty body;
/// every other non-POST verb gets the JSON 405 via the method fallback.
pub fn contact_routes() -> Router {
    Router::new().route(
        "/api/submit-contact",
        post(handlers::submit_contact)
            .options(handlers::preflight)
            .fallback(handlers::method_not_allowed),
    )
}

// src/contact/handlers.rs
//! Contact form submission handler
//!
//! Strictly linear pipeline: config gate, validate/normalize, persist,
//! then two best-effort emails. Persistence must succeed before any email
//! is attempted; email failures are logged and never affect the response.

use axum::extract::rejection::JsonRejection;
use axum::{extract::Extension, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{error, info};

use super::models::{ContactFormRequest, ContactFormResponse};
use super::emails;
use super::validators::{normalize, ContactValidator};
use crate::common::{safe_email_log, ApiError, AppState, Validator};

const CONFIRMATION_COPY: &str = "Thank you for your message! We'll be in touch soon.";

/// POST /api/submit-contact - Submit contact form (public endpoint)
pub async fn submit_contact(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<ContactFormRequest>, JsonRejection>,
) -> Result<Json<ContactFormResponse>, ApiError> {
    // All three secrets must be present before any work happens
    let (store, mailer) = match (state.store.as_ref(), state.mailer.as_ref()) {
        (Some(store), Some(mailer)) => (store, mailer),
        _ => return Err(ApiError::Configuration),
    };

    // Keep the error contract JSON even when the body never parsed
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    // Validate before any side effect; collect every violation
    let result = ContactValidator.validate(&request);
    if !result.is_valid {
        return Err(result.into());
    }
    let submission = normalize(&request);

    // The one fatal step: everything downstream needs the submission id
    let stored = store
        .insert(&submission)
        .await
        .map_err(ApiError::Persistence)?;

    info!(
        id = %stored.id,
        email = %safe_email_log(&stored.email),
        "Contact submission saved"
    );

    // Both sends are best-effort and isolated from each other
    if let Err(e) = mailer.send(&emails::confirmation_email(&state.config, &stored)).await {
        error!(error = %e, id = %stored.id, "Failed to send confirmation email");
    }

    if let Err(e) = mailer.send(&emails::notification_email(&state.config, &stored)).await {
        error!(error = %e, id = %stored.id, "Failed to send notification email");
    }

    Ok(Json(ContactFormResponse {
        success: true,
        message: CONFIRMATION_COPY.to_string(),
        id: stored.id,
    }))
}

/// OPTIONS /api/submit-contact - pre-flight; the CORS layer attaches headers
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other verb on the submit endpoint
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

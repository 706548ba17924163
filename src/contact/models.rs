// src/contact/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw contact-form body as it arrives on the wire
///
/// Every field is optional at the parse layer so that missing fields surface
/// as validation errors with proper messages instead of deserialization
/// failures.
#[derive(Debug, Deserialize)]
pub struct ContactFormRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Validated and normalized submission, safe to persist and render
///
/// All fields are trimmed; `company` is `None` when absent or empty.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

/// Submission as returned by the store, with its assigned identity
#[derive(Debug, Clone, Deserialize)]
pub struct StoredSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ContactFormResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

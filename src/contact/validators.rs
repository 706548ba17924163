// src/contact/validators.rs

use regex::Regex;
use std::sync::LazyLock;

use super::models::{ContactFormRequest, ContactSubmission};
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Contact Form Validator
// ============================================================================

/// RFC-shaped email check: one '@', no whitespace, dotted domain
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

pub struct ContactValidator;

impl Validator<ContactFormRequest> for ContactValidator {
    /// Collects every violation before returning, so a caller that breaks
    /// multiple constraints gets the complete list in one response.
    fn validate(&self, data: &ContactFormRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        // All constraints apply to trimmed values
        let name = data.name.as_deref().unwrap_or("").trim();
        let email = data.email.as_deref().unwrap_or("").trim();
        let company = data.company.as_deref().unwrap_or("").trim();
        let message = data.message.as_deref().unwrap_or("").trim();

        if name.is_empty() {
            result.add_error("name", "Name is required");
        } else if name.chars().count() > 100 {
            result.add_error("name", "Name must be less than 100 characters");
        }

        if email.is_empty() {
            result.add_error("email", "Email is required");
        } else if !EMAIL_RE.is_match(email) {
            result.add_error("email", "Invalid email address");
        } else if email.chars().count() > 255 {
            result.add_error("email", "Email must be less than 255 characters");
        }

        if company.chars().count() > 100 {
            result.add_error("company", "Company name must be less than 100 characters");
        }

        if message.chars().count() < 10 {
            result.add_error("message", "Message must be at least 10 characters");
        } else if message.chars().count() > 2000 {
            result.add_error("message", "Message must be less than 2000 characters");
        }

        result
    }
}

/// Produces the trimmed submission; call only after validation passed
///
/// Absent and empty-after-trim `company` both normalize to `None`.
pub fn normalize(request: &ContactFormRequest) -> ContactSubmission {
    let company = request
        .company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    ContactSubmission {
        name: request.name.as_deref().unwrap_or("").trim().to_string(),
        email: request.email.as_deref().unwrap_or("").trim().to_string(),
        company,
        message: request.message.as_deref().unwrap_or("").trim().to_string(),
    }
}

// src/common/config.rs
//! Environment-backed application configuration
//!
//! All secrets and policy knobs are resolved exactly once at startup. The
//! store URL and service credential each accept several alias names (first
//! present wins) because some deployment targets disallow certain prefixes
//! for user-defined secrets.

use std::env;

/// Name of the mail provider API key variable
const MAIL_API_KEY_VAR: &str = "RESEND_API_KEY";

/// Accepted aliases for the submission store URL, in priority order
const STORE_URL_VARS: &[&str] = &["SB_URL", "SERVICE_URL", "SUPABASE_URL"];

/// Accepted aliases for the store service credential, in priority order
const STORE_KEY_VARS: &[&str] = &[
    "SB_SERVICE_ROLE_KEY",
    "SERVICE_ROLE_KEY",
    "SUPABASE_SERVICE_ROLE_KEY",
];

const DEFAULT_ALLOWED_ORIGINS: &str =
    "https://nxgailabs.com,https://www.nxgailabs.com,http://localhost:5173";

/// Preview deployments get per-branch subdomains, so the allow-list carries
/// a suffix match in addition to the exact origins.
const PREVIEW_ORIGIN_SUFFIX: &str = ".vercel.app";

const DEFAULT_FROM_ADDRESS: &str = "Nxg AI Labs <onboarding@resend.dev>";
const DEFAULT_AGENCY_INBOX: &str = "nxgailabs@gmail.com";

/// Resolved application configuration, read-only after startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mail_api_key: Option<String>,
    pub store_url: Option<String>,
    pub store_service_key: Option<String>,
    pub allowed_origins: Vec<String>,
    pub preview_origin_suffix: String,
    pub from_address: String,
    pub agency_inbox: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            mail_api_key: non_empty_env(MAIL_API_KEY_VAR),
            store_url: first_env(STORE_URL_VARS),
            store_service_key: first_env(STORE_KEY_VARS),
            allowed_origins,
            preview_origin_suffix: PREVIEW_ORIGIN_SUFFIX.to_string(),
            from_address: env::var("CONTACT_FROM_EMAIL")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            agency_inbox: env::var("CONTACT_INBOX_EMAIL")
                .unwrap_or_else(|_| DEFAULT_AGENCY_INBOX.to_string()),
        }
    }

    /// True when every secret the submit pipeline depends on is present
    pub fn secrets_present(&self) -> bool {
        self.mail_api_key.is_some() && self.store_url.is_some() && self.store_service_key.is_some()
    }
}

/// Reads a variable, treating set-but-empty the same as unset
fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the first variable from `names` that is set and non-empty
fn first_env(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| non_empty_env(name))
}

// Application state shared across all requests

use std::sync::Arc;

use crate::common::AppConfig;
use crate::services::{Mailer, SubmissionStore};

/// Application state containing configuration and external-service clients
///
/// Read-only after startup. The clients are `None` when any of the three
/// required secrets is missing; the submit handler checks this per request
/// and answers with the fixed configuration error.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Option<Arc<dyn SubmissionStore>>,
    pub mailer: Option<Arc<dyn Mailer>>,
}

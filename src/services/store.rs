// src/services/store.rs
//! Submission store client
//!
//! The store is an external managed database exposed over a PostgREST-style
//! HTTP interface. This handler owns nothing of the schema; it inserts one
//! row per accepted request and reads back the store-assigned id and
//! creation timestamp.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

use crate::contact::models::{ContactSubmission, StoredSubmission};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store rejected insert with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("store returned an unexpected payload: {0}")]
    Payload(String),
}

/// Insert-only view of the submission store
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persists one submission and returns it with the store-assigned
    /// `id` and `created_at`.
    async fn insert(&self, submission: &ContactSubmission) -> Result<StoredSubmission, StoreError>;
}

/// PostgREST-backed store client
pub struct RestSubmissionStore {
    http: Client,
    base_url: String,
    service_key: String,
}

impl RestSubmissionStore {
    pub fn new(http: Client, base_url: String, service_key: String) -> Self {
        Self {
            http,
            base_url,
            service_key,
        }
    }

    fn insert_url(&self) -> String {
        format!(
            "{}/rest/v1/contact_submissions",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl SubmissionStore for RestSubmissionStore {
    async fn insert(&self, submission: &ContactSubmission) -> Result<StoredSubmission, StoreError> {
        let url = self.insert_url();
        debug!(url = %url, "Inserting contact submission");

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            // Ask PostgREST to return the inserted row so we get the id
            .header("Prefer", "return=representation")
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Store rejected submission insert");
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // return=representation yields an array with exactly one row
        let mut rows: Vec<StoredSubmission> = response.json().await?;
        rows.pop()
            .ok_or_else(|| StoreError::Payload("empty insert result".to_string()))
    }
}

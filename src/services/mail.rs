// src/services/mail.rs
//! Mail provider client
//!
//! Thin wrapper over the provider's transactional send endpoint. Sends are
//! best-effort at the call site: the dispatcher logs failures and never lets
//! them affect the request outcome.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::common::safe_email_log;

const SEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("mail provider rejected send with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// One outgoing transactional message in the provider's wire shape
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct SendReceipt {
    id: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Resend-backed mailer
pub struct ResendMailer {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl ResendMailer {
    pub fn new(http: Client, api_key: String) -> Self {
        Self {
            http,
            api_key,
            endpoint: SEND_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Mail provider rejected send");
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let receipt: SendReceipt = response.json().await.unwrap_or(SendReceipt { id: None });
        info!(
            to = %email.to.iter().map(|a| safe_email_log(a)).collect::<Vec<_>>().join(", "),
            message_id = ?receipt.id,
            "Email sent"
        );

        Ok(())
    }
}

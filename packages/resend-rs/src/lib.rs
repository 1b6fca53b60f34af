//! Pure Resend REST API client.
//!
//! A minimal client for the Resend transactional email API. Supports sending
//! a single HTML email.
//!
//! # Example
//!
//! ```rust,ignore
//! use resend::{EmailMessage, ResendClient};
//!
//! let client = ResendClient::new("re_api_key".into());
//!
//! let sent = client
//!     .send(&EmailMessage {
//!         from: "Sender <onboarding@resend.dev>".into(),
//!         to: "user@example.com".into(),
//!         subject: "Hello".into(),
//!         html: "<p>Hi!</p>".into(),
//!     })
//!     .await?;
//! println!("sent as {}", sent.id);
//! ```

pub mod error;

pub use error::{ResendError, Result};

use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://api.resend.com";

/// A single outbound email. Matches the body of `POST /emails`.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Subset of the response Resend returns on success.
#[derive(Debug, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

pub struct ResendClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            api_key,
        }
    }

    /// Point the client at a different host. Used by tests to target a mock
    /// server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send one email.
    pub async fn send(&self, message: &EmailMessage) -> Result<SentEmail> {
        let url = format!("{}/emails", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ResendError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let sent: SentEmail = resp.json().await?;
        tracing::debug!(email_id = %sent.id, to = %message.to, "Email accepted by Resend");
        Ok(sent)
    }
}

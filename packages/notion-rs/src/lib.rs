//! Pure Notion REST API client.
//!
//! A minimal client for the Notion pages API. Supports creating a page (one
//! row) inside a database, which is all a signup form needs.
//!
//! # Example
//!
//! ```rust,ignore
//! use notion::NotionClient;
//!
//! let client = NotionClient::new("secret-token".into(), "database-id".into());
//!
//! let page = client.create_email_row("user@example.com", "Waitlist").await?;
//! println!("stored as {}", page.id);
//! ```

pub mod error;
pub mod types;

pub use error::{NotionError, Result};
pub use types::{CreatePageRequest, Page, Parent};

const BASE_URL: &str = "https://api.notion.com";

/// API version header Notion requires on every call.
const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    database_id: String,
}

impl NotionClient {
    pub fn new(token: String, database_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            token,
            database_id,
        }
    }

    /// Point the client at a different host. Used by tests to target a mock
    /// server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a database row holding an email address and a status select.
    ///
    /// Notion databases do not enforce uniqueness on email properties, so
    /// calling this twice with the same email creates two rows.
    pub async fn create_email_row(&self, email: &str, status: &str) -> Result<Page> {
        let body = CreatePageRequest::email_row(&self.database_id, email, status);

        let url = format!("{}/v1/pages", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status_code = resp.status();
        if !status_code.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status_code.as_u16(),
                message,
            });
        }

        let page: Page = resp.json().await?;
        tracing::debug!(page_id = %page.id, "Notion page created");
        Ok(page)
    }
}

//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container used by the domain
//! handlers. All external services use trait abstractions to enable testing.

use anyhow::Result;
use async_trait::async_trait;
use notion::NotionClient;
use resend::{EmailMessage, ResendClient};
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{BaseNotifier, BaseRecordStore};

// =============================================================================
// NotionClient Adapter (implements BaseRecordStore trait)
// =============================================================================

/// Wrapper around NotionClient that implements BaseRecordStore trait
pub struct NotionAdapter(pub Arc<NotionClient>);

impl NotionAdapter {
    pub fn new(client: Arc<NotionClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseRecordStore for NotionAdapter {
    async fn create_record(&self, email: &str, status: &str) -> Result<()> {
        self.0
            .create_email_row(email, status)
            .await
            .map(|_| ())
            .map_err(anyhow::Error::from)
    }
}

// =============================================================================
// ResendClient Adapter (implements BaseNotifier trait)
// =============================================================================

/// Wrapper around ResendClient that implements BaseNotifier trait
pub struct ResendAdapter(pub Arc<ResendClient>);

impl ResendAdapter {
    pub fn new(client: Arc<ResendClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseNotifier for ResendAdapter {
    async fn send_email(&self, message: &EmailMessage) -> Result<()> {
        self.0
            .send(message)
            .await
            .map(|_| ())
            .map_err(anyhow::Error::from)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub record_store: Arc<dyn BaseRecordStore>,
    pub notifier: Arc<dyn BaseNotifier>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(record_store: Arc<dyn BaseRecordStore>, notifier: Arc<dyn BaseNotifier>) -> Self {
        Self {
            record_store,
            notifier,
        }
    }

    /// Wire up the production collaborators from configuration
    pub fn from_config(config: &Config) -> Self {
        let notion = Arc::new(NotionClient::new(
            config.notion_token.clone(),
            config.notion_database_id.clone(),
        ));
        let resend = Arc::new(ResendClient::new(config.resend_api_key.clone()));

        Self::new(
            Arc::new(NotionAdapter::new(notion)),
            Arc::new(ResendAdapter::new(resend)),
        )
    }
}

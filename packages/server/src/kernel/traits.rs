// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Business logic
// (like "accept a waitlist submission") lives in domain functions that use
// these traits.
//
// Naming convention: Base* for trait names (e.g., BaseRecordStore)

use anyhow::Result;
use async_trait::async_trait;
use resend::EmailMessage;

// =============================================================================
// Record Store Trait (Infrastructure - persistence collaborator)
// =============================================================================

#[async_trait]
pub trait BaseRecordStore: Send + Sync {
    /// Create one record for an email address, tagged with a status label.
    ///
    /// The backing store does not enforce uniqueness; calling this twice with
    /// the same email creates two records.
    async fn create_record(&self, email: &str, status: &str) -> Result<()>;
}

// =============================================================================
// Notifier Trait (Infrastructure - messaging collaborator)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Send one transactional email.
    async fn send_email(&self, message: &EmailMessage) -> Result<()>;
}

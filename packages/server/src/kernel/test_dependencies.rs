// Mock implementations for testing
//
// Provides mock collaborators that can be injected into ServerDeps for tests.
// Each mock records the calls it receives and can be told to fail.

use anyhow::Result;
use async_trait::async_trait;
use resend::EmailMessage;
use std::sync::{Arc, Mutex};

use super::{BaseNotifier, BaseRecordStore, ServerDeps};

// =============================================================================
// Mock Record Store
// =============================================================================

/// Arguments captured from a create_record call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCallArgs {
    pub email: String,
    pub status: String,
}

#[derive(Default)]
pub struct MockRecordStore {
    calls: Arc<Mutex<Vec<RecordCallArgs>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call return an error
    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    /// Get all recorded calls with their arguments
    pub fn calls(&self) -> Vec<RecordCallArgs> {
        self.calls.lock().unwrap().clone()
    }

    /// Check if an email was submitted for storage
    pub fn was_recorded(&self, email: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c.email == email)
    }
}

#[async_trait]
impl BaseRecordStore for MockRecordStore {
    async fn create_record(&self, email: &str, status: &str) -> Result<()> {
        self.calls.lock().unwrap().push(RecordCallArgs {
            email: email.to_string(),
            status: status.to_string(),
        });

        if *self.fail.lock().unwrap() {
            anyhow::bail!("mock record store failure");
        }
        Ok(())
    }
}

// =============================================================================
// Mock Notifier
// =============================================================================

#[derive(Default)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call return an error
    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    /// Get all emails handed to the notifier
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Check if an email was addressed to a recipient
    pub fn was_notified(&self, to: &str) -> bool {
        self.sent.lock().unwrap().iter().any(|m| m.to == to)
    }
}

#[async_trait]
impl BaseNotifier for MockNotifier {
    async fn send_email(&self, message: &EmailMessage) -> Result<()> {
        self.sent.lock().unwrap().push(message.clone());

        if *self.fail.lock().unwrap() {
            anyhow::bail!("mock notifier failure");
        }
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Pre-wired mock collaborators plus the ServerDeps that holds them.
///
/// Keeps handles to the mocks so tests can assert on recorded calls after
/// exercising the handler.
pub struct TestDependencies {
    pub record_store: Arc<MockRecordStore>,
    pub notifier: Arc<MockNotifier>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            record_store: Arc::new(MockRecordStore::new()),
            notifier: Arc::new(MockNotifier::new()),
        }
    }

    pub fn with_record_store(mut self, record_store: MockRecordStore) -> Self {
        self.record_store = Arc::new(record_store);
        self
    }

    pub fn with_notifier(mut self, notifier: MockNotifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn deps(&self) -> ServerDeps {
        ServerDeps::new(self.record_store.clone(), self.notifier.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

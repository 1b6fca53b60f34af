//! Waitlist submission handling.
//!
//! One pass per request: validate, normalize, then fan out to the record
//! store and the notifier. Both downstream calls are best-effort - a failure
//! in either is logged and the caller still gets an accepted response. The
//! user should never see an error because an internal store hiccupped.

use std::sync::Arc;

use crate::kernel::ServerDeps;

use super::errors::WaitlistError;
use super::models::{SubmissionOutcome, SubmissionRequest};
use super::template::welcome_email;

/// Status label attached to every stored record.
pub const WAITLIST_STATUS: &str = "Waitlist";

/// Stateless per-request handler. Holds no state across requests; safe to
/// share between concurrent requests.
#[derive(Clone)]
pub struct SubmissionHandler {
    deps: Arc<ServerDeps>,
}

impl SubmissionHandler {
    pub fn new(deps: Arc<ServerDeps>) -> Self {
        Self { deps }
    }

    /// Handle one signup.
    ///
    /// Validation failures reject the request before any downstream call.
    /// After that the outcome is decided: the record store and the notifier
    /// are each attempted exactly once, failures logged and swallowed, and
    /// the submission is reported accepted regardless.
    pub async fn handle(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionOutcome, WaitlistError> {
        let email = match request.email.as_deref() {
            Some(email) if is_plausible_email(email) => email,
            _ => return Err(WaitlistError::InvalidInput),
        };

        let normalized = normalize_email(email);

        if let Err(err) = self
            .deps
            .record_store
            .create_record(&normalized, WAITLIST_STATUS)
            .await
        {
            // Duplicates and store outages alike: log and keep going, the
            // welcome email should still go out.
            tracing::error!(error = %err, email = %normalized, "Record store write failed");
        }

        let message = welcome_email(&normalized);
        if let Err(err) = self.deps.notifier.send_email(&message).await {
            tracing::error!(error = %err, email = %normalized, "Welcome email send failed");
        }

        Ok(SubmissionOutcome::Accepted)
    }
}

/// Deliberately weak check: non-empty, contains `@` and `.`. Do not tighten
/// it - a stricter validator would reject addresses the signup form
/// currently accepts.
fn is_plausible_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && email.contains('.')
}

/// Lowercase + trim. Everything downstream sees only this form.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausible_email_requires_at_and_dot() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("User@Example.COM "));
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("user.example.com"));
        assert!(!is_plausible_email("user@example"));
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
        assert_eq!(normalize_email("user@example.com"), "user@example.com");
    }
}

use serde::Deserialize;

/// One incoming signup. Created per request, never stored by this service -
/// the record store owns persistence.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub email: Option<String>,
}

impl SubmissionRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

/// Result of a handled submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The email passed validation; both downstream calls were attempted.
    Accepted,
}

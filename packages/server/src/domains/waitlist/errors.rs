use thiserror::Error;

/// Errors a waitlist submission can surface to the caller.
///
/// Downstream collaborator failures are deliberately absent: they are logged
/// at the call site and never alter the caller-visible outcome.
#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("Invalid email address")]
    InvalidInput,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

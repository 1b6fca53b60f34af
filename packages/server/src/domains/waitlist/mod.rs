//! Waitlist domain: accept a signup, store it, send the welcome email.

pub mod errors;
pub mod models;
pub mod submission;
pub mod template;

pub use errors::WaitlistError;
pub use models::{SubmissionOutcome, SubmissionRequest};
pub use submission::{SubmissionHandler, WAITLIST_STATUS};
pub use template::welcome_email;

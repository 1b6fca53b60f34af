// VibeCode Waitlist - API Core
//
// This crate provides the backend API for the waitlist signup form: one
// endpoint that stores the email in Notion and sends a welcome email via
// Resend, both best-effort.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

// HTTP server: router construction and route handlers.

pub mod app;
pub mod routes;

pub use app::{build_app, AppState};

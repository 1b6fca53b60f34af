//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::waitlist::SubmissionHandler;
use crate::kernel::ServerDeps;
use crate::server::routes::{health_handler, method_not_allowed, waitlist_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<SubmissionHandler>,
}

/// Build the Axum application router
pub fn build_app(deps: Arc<ServerDeps>) -> Router {
    let state = AppState {
        handler: Arc::new(SubmissionHandler::new(deps)),
    };

    // The signup form posts cross-origin from the static site.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/waitlist",
            post(waitlist_handler).fallback(method_not_allowed),
        )
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

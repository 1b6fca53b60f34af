use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domains::waitlist::{SubmissionOutcome, SubmissionRequest, WaitlistError};
use crate::server::app::AppState;

/// POST /api/waitlist
///
/// The body is read raw and parsed by hand rather than through the `Json`
/// extractor: a body that is not valid JSON is an orchestration fault (500
/// with the generic message), not a client validation error, and the
/// extractor's built-in rejections would answer with the wrong status and
/// body shape.
pub async fn waitlist_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Response {
    let request: SubmissionRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!(error = %err, "Waitlist request body failed to parse");
            return internal_error();
        }
    };

    match state.handler.handle(request).await {
        Ok(SubmissionOutcome::Accepted) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "You're on the list! Check your inbox for a welcome email."
            })),
        )
            .into_response(),
        Err(WaitlistError::InvalidInput) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Please provide a valid email address." })),
        )
            .into_response(),
        Err(WaitlistError::Internal(err)) => {
            tracing::error!(error = %err, "Waitlist submission failed");
            internal_error()
        }
    }
}

/// Fallback for non-POST methods on the waitlist route. Axum's default 405
/// has an empty body; the form expects JSON.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Something went wrong. Please try again in a moment." })),
    )
        .into_response()
}

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::payload;
use crate::application::SubmissionAck;
use crate::state::SharedState;

/// `POST /api/get-scouted`: email the application to the fixed recipient.
///
/// Any failure, including an oversized or unparseable body, is logged and answered with a
/// bare `500 {"success": false}`.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Unreadable application body: {e}");
            return failure();
        }
    };

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let submission = match payload::parse_body(content_type, &body) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!("Rejected application payload: {e}");
            return failure();
        }
    };

    match state.dispatcher.dispatch(&submission).await {
        Ok(()) => {
            tracing::info!("Application notification sent");
            (StatusCode::OK, Json(SubmissionAck { success: true })).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to dispatch application: {e}");
            failure()
        }
    }
}

fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SubmissionAck { success: false }),
    )
        .into_response()
}

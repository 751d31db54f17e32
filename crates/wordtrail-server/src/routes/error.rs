//! API Error Mapping
//!
//! Turns a `StoryError` into an HTTP response. Every failure is logged once
//! here, at the boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use wordtrail::StoryError;

use crate::models::ErrorResponse;

/// Error returned by route handlers
#[derive(Debug)]
pub struct ApiError(pub StoryError);

impl From<StoryError> for ApiError {
    fn from(err: StoryError) -> Self {
        Self(err)
    }
}

/// HTTP status for each error kind.
///
/// Callers only ever see 500 for pipeline failures, whatever the kind.
pub fn status_code(err: &StoryError) -> StatusCode {
    match err {
        StoryError::Validation(_)
        | StoryError::Upstream { .. }
        | StoryError::Transport { .. }
        | StoryError::MalformedResponse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        tracing::error!(
            kind = err.kind(),
            provider = ?err.provider(),
            "Error: {}",
            err
        );

        (status_code(&err), Json(ErrorResponse::new(err.to_string()))).into_response()
    }
}

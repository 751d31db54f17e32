//! Story Routes - Three words in, story segment out

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    routing::post,
    Json, Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use wordtrail::StoryError;

use super::error::ApiError;
use crate::models::{ErrorResponse, GenerateStoryRequest, StoryResponse};
use crate::AppState;

/// Resolve a coordinate and generate the next story segment
#[utoipa::path(
    post,
    path = "/story",
    request_body = GenerateStoryRequest,
    responses(
        (status = 200, description = "Three-word address, plus a story segment unless getWordsOnly is set", body = StoryResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Invalid request or provider failure", body = ErrorResponse)
    ),
    tag = "Story"
)]
pub async fn generate_story(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoryResponse>, ApiError> {
    // Parsed by hand so schema errors share the JSON error shape
    let payload: GenerateStoryRequest =
        serde_json::from_slice(&body).map_err(|e| StoryError::validation(e.to_string()))?;

    let segment = state.story_service.generate(payload.into()).await?;

    Ok(Json(segment.into()))
}

/// CORS preflight: headers only, empty body
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/story",
            post(generate_story)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}

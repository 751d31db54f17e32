use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{AnthropicClient, What3WordsClient};
use application::StoryService;
use config::StoryConfig;

/// Story service wired to the real providers
pub type AppStoryService = StoryService<What3WordsClient, AnthropicClient>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub story_service: Arc<AppStoryService>,
}

impl AppState {
    /// Wire adapters and the story service from configuration
    pub fn from_config(config: &StoryConfig) -> Self {
        let geocoder = What3WordsClient::new(&config.what3words_api_key)
            .with_base_url(&config.what3words_base_url);
        let llm = AnthropicClient::new(&config.anthropic_api_key)
            .with_model(&config.model)
            .with_base_url(&config.anthropic_base_url);

        let story_service = StoryService::new(
            Arc::new(geocoder),
            Arc::new(llm),
            config.prompts.clone(),
            config.completion,
        );

        Self {
            story_service: Arc::new(story_service),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Wordtrail API is running - every place has a story".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::story::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🗺️  Wordtrail API initializing...");

    let config = StoryConfig::from_secrets(&secrets);
    let state = AppState::from_config(&config);

    tracing::info!(
        "🧭 Story pipeline ready (model: {}, max_tokens: {})",
        config.model,
        config.completion.max_tokens
    );

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Wordtrail API ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::from_config(&StoryConfig::new("w3w-key", "anthropic-key")))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get_json("/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Wordtrail API");
        assert!(body["paths"]["/story"].is_object());
    }
}

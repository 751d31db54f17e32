//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorResponse, GenerateStoryRequest, StoryResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Story endpoints
        super::story::generate_story,
    ),
    info(
        title = "Wordtrail API",
        version = "0.1.0",
        description = "Every place has three words. Wordtrail turns them into a story, one location at a time.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Story", description = "Story - Three-word addresses woven into a narrative"),
    ),
    components(
        schemas(
            GenerateStoryRequest,
            StoryResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_story_endpoint() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();

        assert!(json["paths"]["/story"]["post"].is_object());
        let schemas = &json["components"]["schemas"];
        for name in ["GenerateStoryRequest", "StoryResponse", "ErrorResponse"] {
            assert!(schemas[name].is_object(), "missing schema {name}");
        }
    }
}

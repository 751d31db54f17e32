//! Story - Wire format of the story endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use wordtrail::{Coordinate, StoryRequest, StorySegment, StoryState};

// ============================================
// Request/Response DTOs
// ============================================

/// Generate story request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest {
    /// Latitude in decimal degrees
    #[schema(example = 51.520847)]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[schema(example = json!(-0.195521))]
    pub longitude: f64,
    /// Three-word address used for the previous segment
    pub previous_words: Option<String>,
    /// Story text so far
    pub story_context: Option<String>,
    /// Return only the words, skipping story generation
    pub get_words_only: Option<bool>,
}

impl From<GenerateStoryRequest> for StoryRequest {
    fn from(req: GenerateStoryRequest) -> Self {
        StoryRequest::new(Coordinate::new(req.latitude, req.longitude))
            .with_state(StoryState::new(req.previous_words, req.story_context))
            .with_words_only(req.get_words_only.unwrap_or(false))
    }
}

/// Story segment response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryResponse {
    /// The three words, in order
    #[schema(example = json!(["filled", "count", "soap"]))]
    pub words: Vec<String>,
    /// Generated text; omitted when only the words were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_segment: Option<String>,
    /// Dot-delimited address
    #[schema(example = "filled.count.soap")]
    pub full_words: String,
}

impl From<StorySegment> for StoryResponse {
    fn from(segment: StorySegment) -> Self {
        Self {
            words: segment.address.words.into(),
            story_segment: segment.story_segment,
            full_words: segment.address.full_words,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wordtrail::ThreeWordAddress;

    #[test]
    fn test_request_accepts_camel_case_fields() {
        let req: GenerateStoryRequest = serde_json::from_value(json!({
            "latitude": 51.5,
            "longitude": -0.1,
            "previousWords": "filled.count.soap",
            "storyContext": "Once upon a time",
            "getWordsOnly": true
        }))
        .unwrap();

        let request: StoryRequest = req.into();
        assert_eq!(request.coordinate, Coordinate::new(51.5, -0.1));
        assert_eq!(request.state.previous_words.as_deref(), Some("filled.count.soap"));
        assert_eq!(request.state.story_context.as_deref(), Some("Once upon a time"));
        assert!(request.words_only);
    }

    #[test]
    fn test_optional_fields_default_and_accept_null() {
        let req: GenerateStoryRequest = serde_json::from_value(json!({
            "latitude": 0.0,
            "longitude": 0.0,
            "previousWords": null,
            "getWordsOnly": null
        }))
        .unwrap();

        let request: StoryRequest = req.into();
        assert_eq!(request.state, StoryState::default());
        assert!(!request.words_only);
    }

    #[test]
    fn test_request_requires_coordinates() {
        let err = serde_json::from_value::<GenerateStoryRequest>(json!({ "latitude": 1.0 }))
            .unwrap_err();
        assert!(err.to_string().contains("longitude"));

        let err = serde_json::from_value::<GenerateStoryRequest>(json!({
            "latitude": "north",
            "longitude": 0.0
        }));
        assert!(err.is_err());
    }

    #[test]
    fn test_words_only_response_omits_story_segment() {
        let address = ThreeWordAddress::parse("filled.count.soap").unwrap();
        let body = serde_json::to_value(StoryResponse::from(StorySegment::words_only(address)))
            .unwrap();

        assert_eq!(
            body,
            json!({ "words": ["filled", "count", "soap"], "fullWords": "filled.count.soap" })
        );
    }

    #[test]
    fn test_full_response_shape() {
        let address = ThreeWordAddress::parse("filled.count.soap").unwrap();
        let body = serde_json::to_value(StoryResponse::from(StorySegment::with_story(
            address,
            "A tale.",
        )))
        .unwrap();

        assert_eq!(
            body,
            json!({
                "words": ["filled", "count", "soap"],
                "storySegment": "A tale.",
                "fullWords": "filled.count.soap"
            })
        );
    }
}

//! Anthropic LLM Implementation
//!
//! Calls the Messages API for single-shot, non-streaming completions.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use wordtrail::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, Provider, StoryError,
    TokenUsage,
};

pub const BASE_URL: &str = "https://api.anthropic.com";
pub const API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// HTTP implementation of LlmProvider
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    model: Option<String>,
    stop_reason: Option<String>,
    usage: Option<Usage>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[async_trait]
impl LlmProvider for AnthropicClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, StoryError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: options.max_tokens,
            messages,
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| StoryError::transport(Provider::Anthropic, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoryError::transport(Provider::Anthropic, e.to_string()))?;

        let payload = match serde_json::from_str::<MessagesResponse>(&body) {
            Ok(payload) => payload,
            Err(_) if !status.is_success() => {
                return Err(StoryError::upstream(
                    Provider::Anthropic,
                    format!("HTTP {}", status),
                ))
            }
            Err(e) => return Err(StoryError::malformed(Provider::Anthropic, e.to_string())),
        };

        if let Some(error) = payload.error {
            return Err(StoryError::upstream(Provider::Anthropic, error.message));
        }

        if !status.is_success() {
            return Err(StoryError::upstream(
                Provider::Anthropic,
                format!("HTTP {}", status),
            ));
        }

        let content = payload
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or_else(|| {
                StoryError::malformed(Provider::Anthropic, "response has no text content block")
            })?;

        let usage = payload
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.input_tokens,
                output_tokens: u.output_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content,
            model: payload.model.unwrap_or_else(|| self.model.clone()),
            usage,
            stop_reason: payload.stop_reason,
        })
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AnthropicClient {
        AnthropicClient::new("test-key").with_base_url(server.uri())
    }

    fn message_response(blocks: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-20250514",
            "content": blocks,
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 42, "output_tokens": 17 }
        })
    }

    #[tokio::test]
    async fn test_complete_sends_messages_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 100,
                "messages": [{ "role": "user", "content": "Tell a story" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_response(json!([
                { "type": "text", "text": "The soap was counted twice." }
            ]))))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .complete_prompt("Tell a story", &CompletionOptions::default())
            .await
            .unwrap();

        assert_eq!(response.content, "The soap was counted twice.");
        assert_eq!(response.model, "claude-sonnet-4-20250514");
        assert_eq!(response.usage.input_tokens, 42);
        assert_eq!(response.usage.output_tokens, 17);
        assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
    }

    #[tokio::test]
    async fn test_first_text_block_wins() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_response(json!([
                { "type": "thinking", "thinking": "..." },
                { "type": "text", "text": "first" },
                { "type": "text", "text": "second" }
            ]))))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .complete_prompt("p", &CompletionOptions::default())
            .await
            .unwrap();

        assert_eq!(response.content, "first");
    }

    #[tokio::test]
    async fn test_error_payload_becomes_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "type": "error",
                "error": { "type": "authentication_error", "message": "invalid x-api-key" }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete_prompt("p", &CompletionOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Anthropic API error: invalid x-api-key");
    }

    #[tokio::test]
    async fn test_empty_content_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(message_response(json!([]))),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete_prompt("p", &CompletionOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StoryError::MalformedResponse {
                provider: Provider::Anthropic,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_model_override_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "model": "claude-haiku",
                "max_tokens": 64,
                "messages": [{ "role": "user", "content": "p" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_response(json!([
                { "type": "text", "text": "ok" }
            ]))))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).with_model("claude-haiku");
        assert_eq!(client.model_id(), "claude-haiku");

        client
            .complete_prompt("p", &CompletionOptions { max_tokens: 64 })
            .await
            .unwrap();
    }
}

//! LLM Provider Port
//!
//! Abstract interface for LLM (Large Language Model) invocations.
//! The story pipeline only needs single-turn text completion, but the
//! interface keeps a message list so providers can be swapped freely.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::StoryError;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Default output budget; story segments are one or two sentences
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Options for LLM completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Response from LLM completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Generated text content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
    /// Why generation stopped, as reported by the provider
    pub stop_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub input_tokens: u32,
    /// Tokens in the completion
    pub output_tokens: u32,
}

/// LLM Provider interface
///
/// # Example
///
/// ```rust,ignore
/// use wordtrail::ports::LlmProvider;
///
/// struct AnthropicClient { /* ... */ }
///
/// #[async_trait]
/// impl LlmProvider for AnthropicClient {
///     async fn complete(&self, messages: &[ChatMessage], options: &CompletionOptions)
///         -> Result<CompletionResponse, StoryError> {
///         // Call the Messages API
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, StoryError>;

    /// Generate a completion for a single user prompt
    async fn complete_prompt(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, StoryError> {
        let messages = [ChatMessage::user(prompt)];
        self.complete(&messages, options).await
    }

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

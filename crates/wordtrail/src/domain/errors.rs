//! Domain Errors
//!
//! Error types for the story pipeline.

use thiserror::Error;

use super::value_objects::Provider;

/// Story pipeline errors
#[derive(Debug, Error)]
pub enum StoryError {
    /// Inbound request body did not match the expected schema
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Provider answered with a structured error payload
    #[error("{provider} API error: {message}")]
    Upstream { provider: Provider, message: String },

    /// Provider could not be reached
    #[error("{provider} request failed: {message}")]
    Transport { provider: Provider, message: String },

    /// Provider answered, but not in the shape we expect
    #[error("Malformed {provider} response: {message}")]
    MalformedResponse { provider: Provider, message: String },
}

impl StoryError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream<T: Into<String>>(provider: Provider, message: T) -> Self {
        Self::Upstream {
            provider,
            message: message.into(),
        }
    }

    pub fn transport<T: Into<String>>(provider: Provider, message: T) -> Self {
        Self::Transport {
            provider,
            message: message.into(),
        }
    }

    pub fn malformed<T: Into<String>>(provider: Provider, message: T) -> Self {
        Self::MalformedResponse {
            provider,
            message: message.into(),
        }
    }

    /// Short machine-readable name of the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            StoryError::Validation(_) => "validation",
            StoryError::Upstream { .. } => "upstream",
            StoryError::Transport { .. } => "transport",
            StoryError::MalformedResponse { .. } => "malformed_response",
        }
    }

    /// Provider responsible for the failure, if any
    pub fn provider(&self) -> Option<Provider> {
        match self {
            StoryError::Validation(_) => None,
            StoryError::Upstream { provider, .. }
            | StoryError::Transport { provider, .. }
            | StoryError::MalformedResponse { provider, .. } => Some(*provider),
        }
    }
}

//! Server configuration
//!
//! Built once at startup from the host's secret store and handed to the
//! adapters and the story service.

use wordtrail::{CompletionOptions, PromptTemplates};

use crate::adapters::{anthropic, what3words};

/// Secret holding the What3Words API key
pub const WHAT3WORDS_API_KEY: &str = "WHAT3WORDS_API_KEY";
/// Secret holding the Anthropic API key
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

/// Configuration for the story pipeline
#[derive(Clone)]
pub struct StoryConfig {
    /// What3Words API key
    pub what3words_api_key: String,
    /// Anthropic API key
    pub anthropic_api_key: String,
    /// What3Words API root (overridable for tests)
    pub what3words_base_url: String,
    /// Anthropic API root (overridable for tests)
    pub anthropic_base_url: String,
    /// Model used for story generation
    pub model: String,
    /// Completion options sent with every generation call
    pub completion: CompletionOptions,
    /// Prompt wording
    pub prompts: PromptTemplates,
}

impl StoryConfig {
    /// Create a configuration with the given keys and default settings
    pub fn new(what3words_api_key: impl Into<String>, anthropic_api_key: impl Into<String>) -> Self {
        Self {
            what3words_api_key: what3words_api_key.into(),
            anthropic_api_key: anthropic_api_key.into(),
            what3words_base_url: what3words::BASE_URL.to_string(),
            anthropic_base_url: anthropic::BASE_URL.to_string(),
            model: anthropic::DEFAULT_MODEL.to_string(),
            completion: CompletionOptions::default(),
            prompts: PromptTemplates::default(),
        }
    }

    /// Read the API keys from the Shuttle secret store
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Read the API keys through an arbitrary lookup.
    ///
    /// A missing key is not fatal: it is logged and left empty, and the
    /// provider rejects the request later.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                tracing::warn!("⚠️  No {} set - provider calls will fail to authenticate", name);
                String::new()
            }
        };

        let what3words_api_key = read(WHAT3WORDS_API_KEY);
        let anthropic_api_key = read(ANTHROPIC_API_KEY);

        Self::new(what3words_api_key, anthropic_api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_reads_both_keys() {
        let secrets = HashMap::from([
            (WHAT3WORDS_API_KEY, "w3w-key".to_string()),
            (ANTHROPIC_API_KEY, "anthropic-key".to_string()),
        ]);

        let config = StoryConfig::from_lookup(|key| secrets.get(key).cloned());

        assert_eq!(config.what3words_api_key, "w3w-key");
        assert_eq!(config.anthropic_api_key, "anthropic-key");
        assert_eq!(config.model, anthropic::DEFAULT_MODEL);
        assert_eq!(config.completion.max_tokens, 100);
        assert_eq!(config.what3words_base_url, "https://api.what3words.com");
        assert_eq!(config.anthropic_base_url, "https://api.anthropic.com");
    }

    #[test]
    fn test_missing_or_blank_keys_are_left_empty() {
        let config = StoryConfig::from_lookup(|key| {
            (key == ANTHROPIC_API_KEY).then(|| "  ".to_string())
        });

        assert!(config.what3words_api_key.is_empty());
        assert!(config.anthropic_api_key.is_empty());
    }

    #[test]
    fn test_defaults_are_overridable_per_field() {
        let config = StoryConfig {
            model: "claude-haiku".to_string(),
            prompts: PromptTemplates::new("open {words}", "go on {words}"),
            ..StoryConfig::new("a", "b")
        };

        assert_eq!(config.what3words_api_key, "a");
        assert_eq!(config.model, "claude-haiku");
        assert_eq!(config.prompts.opening, "open {words}");
    }
}

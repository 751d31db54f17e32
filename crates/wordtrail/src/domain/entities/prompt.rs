//! Prompt - Instructions sent to the language model
//!
//! Pure domain entity without infrastructure dependencies.

use super::address::ThreeWordAddress;
use super::story::StoryState;

/// Default template for the first segment of a story
pub const DEFAULT_OPENING_TEMPLATE: &str = "Write the beginning of a story (1-2 sentences) \
that naturally incorporates all three of these words: {words}.";

/// Default template for continuing an existing story
pub const DEFAULT_CONTINUATION_TEMPLATE: &str = "Continue this story. \
Previous location words were: {previous_words}. \
New location words are: {words}. \
Previous story: {story_context}\n\n\
Write 1-2 sentences continuing the story, naturally incorporating all three new words: {words}.";

/// Which variant of the prompt was built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Opening,
    Continuation,
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptKind::Opening => write!(f, "opening"),
            PromptKind::Continuation => write!(f, "continuation"),
        }
    }
}

/// A rendered prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPrompt {
    pub kind: PromptKind,
    pub text: String,
}

/// Prompt templates.
///
/// Placeholders: `{words}` (the new words, comma separated),
/// `{previous_words}` and `{story_context}` (continuation only).
/// Substitution is single-pass, so braces inside caller text are left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    pub opening: String,
    pub continuation: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            opening: DEFAULT_OPENING_TEMPLATE.to_string(),
            continuation: DEFAULT_CONTINUATION_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn new(opening: impl Into<String>, continuation: impl Into<String>) -> Self {
        Self {
            opening: opening.into(),
            continuation: continuation.into(),
        }
    }

    /// Build the prompt for a freshly resolved address.
    ///
    /// Uses the continuation template only when the state carries both
    /// previous words and story text.
    pub fn build(&self, address: &ThreeWordAddress, state: &StoryState) -> StoryPrompt {
        let words = address.joined(", ");

        match state.continuation() {
            Some((previous_words, story_context)) => StoryPrompt {
                kind: PromptKind::Continuation,
                text: render(
                    &self.continuation,
                    &[
                        ("words", words.as_str()),
                        ("previous_words", previous_words),
                        ("story_context", story_context),
                    ],
                ),
            },
            None => StoryPrompt {
                kind: PromptKind::Opening,
                text: render(&self.opening, &[("words", words.as_str())]),
            },
        }
    }
}

/// Replace `{name}` placeholders in one pass. Unknown placeholders stay as-is.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after_brace = &rest[start + 1..];

        let matched = values.iter().find_map(|(name, value)| {
            after_brace
                .strip_prefix(*name)
                .and_then(|tail| tail.strip_prefix('}'))
                .map(|tail| (*value, tail))
        });

        match matched {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after_brace;
            }
        }
    }

    out.push_str(rest);
    out
}

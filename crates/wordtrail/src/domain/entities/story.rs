//! Story - Caller-owned narrative state and generated segments

use super::address::ThreeWordAddress;
use super::coordinate::Coordinate;

/// Running narrative supplied by the caller on each request.
///
/// Nothing is kept server-side; the caller resubmits this every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryState {
    /// Words used for the previous segment
    pub previous_words: Option<String>,
    /// Story text so far
    pub story_context: Option<String>,
}

impl StoryState {
    pub fn new(previous_words: Option<String>, story_context: Option<String>) -> Self {
        Self {
            previous_words,
            story_context,
        }
    }

    /// Previous words and story text, when both are present and non-blank.
    pub fn continuation(&self) -> Option<(&str, &str)> {
        let previous_words = non_blank(self.previous_words.as_deref())?;
        let story_context = non_blank(self.story_context.as_deref())?;
        Some((previous_words, story_context))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Everything one pass through the pipeline needs
#[derive(Debug, Clone, PartialEq)]
pub struct StoryRequest {
    pub coordinate: Coordinate,
    pub state: StoryState,
    /// Stop after address resolution; no text is generated
    pub words_only: bool,
}

impl StoryRequest {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            state: StoryState::default(),
            words_only: false,
        }
    }

    pub fn with_state(mut self, state: StoryState) -> Self {
        self.state = state;
        self
    }

    pub fn with_words_only(mut self, words_only: bool) -> Self {
        self.words_only = words_only;
        self
    }
}

/// Result of one pass through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySegment {
    pub address: ThreeWordAddress,
    /// None when only the words were requested
    pub story_segment: Option<String>,
}

impl StorySegment {
    pub fn words_only(address: ThreeWordAddress) -> Self {
        Self {
            address,
            story_segment: None,
        }
    }

    pub fn with_story(address: ThreeWordAddress, story_segment: impl Into<String>) -> Self {
        Self {
            address,
            story_segment: Some(story_segment.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuation_requires_both_fields() {
        let state = StoryState::new(Some("a.b.c".into()), Some("Once upon a time".into()));
        assert_eq!(state.continuation(), Some(("a.b.c", "Once upon a time")));

        let state = StoryState::new(Some("a.b.c".into()), None);
        assert_eq!(state.continuation(), None);

        let state = StoryState::new(None, Some("Once upon a time".into()));
        assert_eq!(state.continuation(), None);

        assert_eq!(StoryState::default().continuation(), None);
    }

    #[test]
    fn test_blank_fields_are_not_a_continuation() {
        let state = StoryState::new(Some("   ".into()), Some("Once upon a time".into()));
        assert_eq!(state.continuation(), None);

        let state = StoryState::new(Some("a.b.c".into()), Some(String::new()));
        assert_eq!(state.continuation(), None);
    }
}

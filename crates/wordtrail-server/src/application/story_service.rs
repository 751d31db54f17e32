//! Story Application Service (Use Case)
//!
//! Resolves a coordinate to its three words, then optionally asks the
//! language model for the next segment of the caller's story.

use std::sync::Arc;

use wordtrail::{
    CompletionOptions, GeocodingService, LlmProvider, PromptTemplates, StoryError, StoryRequest,
    StorySegment,
};

/// Application service for story segment generation
pub struct StoryService<G: GeocodingService, L: LlmProvider> {
    geocoder: Arc<G>,
    llm: Arc<L>,
    prompts: PromptTemplates,
    options: CompletionOptions,
}

impl<G: GeocodingService, L: LlmProvider> StoryService<G, L> {
    pub fn new(
        geocoder: Arc<G>,
        llm: Arc<L>,
        prompts: PromptTemplates,
        options: CompletionOptions,
    ) -> Self {
        Self {
            geocoder,
            llm,
            prompts,
            options,
        }
    }

    /// Run the pipeline for one request.
    ///
    /// The LLM is only called when the request wants more than the words.
    pub async fn generate(&self, request: StoryRequest) -> Result<StorySegment, StoryError> {
        // 1. Resolve the three-word address
        let address = self.geocoder.convert_to_words(request.coordinate).await?;

        tracing::info!(
            "📍 Resolved {} -> {}",
            request.coordinate,
            address.full_words
        );

        // 2. Words only: stop here
        if request.words_only {
            return Ok(StorySegment::words_only(address));
        }

        // 3. Build the prompt for this stage of the story
        let prompt = self.prompts.build(&address, &request.state);

        // 4. Generate
        let completion = self
            .llm
            .complete_prompt(&prompt.text, &self.options)
            .await?;

        tracing::info!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            stop_reason = completion.stop_reason.as_deref().unwrap_or("unknown"),
            model = %completion.model,
            "✍️  Generated {} segment for {} via {}",
            prompt.kind,
            address.full_words,
            self.llm.model_id()
        );

        Ok(StorySegment::with_story(address, completion.content))
    }
}

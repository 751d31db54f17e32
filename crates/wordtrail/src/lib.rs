//! Wordtrail Domain Library
//!
//! Core domain types and interfaces for Wordtrail, which turns a
//! coordinate into its three-word address and weaves those words into
//! a short story segment.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: Request-scoped models (Coordinate, ThreeWordAddress, StoryState, prompts)
//!   - `value_objects/`: Immutable value types (Provider)
//!   - `errors/`: The tagged `StoryError`
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Geocoding and LLM provider interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use wordtrail::{Coordinate, PromptTemplates, StoryState};
//! use wordtrail::ports::{GeocodingService, LlmProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Coordinate, PromptKind, PromptTemplates, Provider, StoryError, StoryPrompt, StoryRequest,
    StorySegment, StoryState, ThreeWordAddress,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionResponse, GeocodingService, LlmProvider,
    MessageRole, TokenUsage, DEFAULT_MAX_TOKENS,
};

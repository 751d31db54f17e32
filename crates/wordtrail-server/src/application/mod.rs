//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the geocoding and language-model providers.

mod story_service;

pub use story_service::StoryService;

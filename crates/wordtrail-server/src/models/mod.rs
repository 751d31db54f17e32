//! Wordtrail Data Models
//!
//! - Story: request/response bodies of the story endpoint

mod story;

pub use story::*;

//! Domain Entities
//!
//! Request-scoped models without infrastructure dependencies.
//! - Coordinate: a point in decimal degrees
//! - ThreeWordAddress: the What3Words address of a coordinate
//! - StoryState / StorySegment: caller-owned narrative state and the result
//! - Prompt: templates turning words and state into an instruction

mod address;
mod coordinate;
mod prompt;
mod story;

pub use address::*;
pub use coordinate::*;
pub use prompt::*;
pub use story::*;

//! Wordtrail API Routes
//!
//! - /story - Three-word address and story segment for a coordinate
//! - /swagger-ui - API documentation

pub mod error;
pub mod story;
pub mod swagger;

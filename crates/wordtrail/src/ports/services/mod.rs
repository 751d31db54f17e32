//! Service Ports
//!
//! Abstract interfaces for external services.

mod geocoding;
mod llm_provider;

pub use geocoding::*;
pub use llm_provider::*;

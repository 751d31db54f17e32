//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod anthropic;
pub mod what3words;

// Re-exports
pub use anthropic::AnthropicClient;
pub use what3words::What3WordsClient;

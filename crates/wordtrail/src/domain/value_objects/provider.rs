//! Provider - External API providers

/// Upstream provider a request depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Coordinate to three-word address conversion
    What3Words,
    /// Story text generation
    Anthropic,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::What3Words => write!(f, "What3Words"),
            Provider::Anthropic => write!(f, "Anthropic"),
        }
    }
}

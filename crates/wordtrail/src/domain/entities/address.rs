//! ThreeWordAddress - The What3Words address of a coordinate

use crate::domain::errors::StoryError;
use crate::domain::value_objects::Provider;

/// A dot-delimited three-word address split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeWordAddress {
    /// Address as returned by the provider, e.g. "filled.count.soap"
    pub full_words: String,
    /// The three words in order
    pub words: [String; 3],
}

impl ThreeWordAddress {
    /// Split a provider address on `.`.
    ///
    /// Anything other than exactly three non-empty words is treated as a
    /// malformed provider response.
    pub fn parse(full_words: &str) -> Result<Self, StoryError> {
        let parts: Vec<&str> = full_words.split('.').collect();

        let words: [String; 3] = match parts.as_slice() {
            [a, b, c] if !a.is_empty() && !b.is_empty() && !c.is_empty() => {
                [a.to_string(), b.to_string(), c.to_string()]
            }
            _ => {
                return Err(StoryError::malformed(
                    Provider::What3Words,
                    format!(
                        "expected a three-word address, got {:?} ({} parts)",
                        full_words,
                        parts.len()
                    ),
                ))
            }
        };

        Ok(Self {
            full_words: full_words.to_string(),
            words,
        })
    }

    /// Words joined for use in natural-language text
    pub fn joined(&self, separator: &str) -> String {
        self.words.join(separator)
    }
}

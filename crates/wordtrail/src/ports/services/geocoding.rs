//! Geocoding Service Port
//!
//! Abstract interface for resolving a coordinate to a three-word address.

use async_trait::async_trait;

use crate::domain::entities::{Coordinate, ThreeWordAddress};
use crate::domain::errors::StoryError;

/// Service interface for coordinate to three-word address conversion
#[async_trait]
pub trait GeocodingService: Send + Sync {
    /// Resolve a coordinate to its three-word address
    async fn convert_to_words(&self, coordinate: Coordinate)
        -> Result<ThreeWordAddress, StoryError>;
}

//! What3Words Geocoding Implementation
//!
//! Resolves coordinates through the v3 `convert-to-3wa` endpoint using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use wordtrail::{Coordinate, GeocodingService, Provider, StoryError, ThreeWordAddress};

pub const BASE_URL: &str = "https://api.what3words.com";

/// HTTP implementation of GeocodingService
#[derive(Clone)]
pub struct What3WordsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl What3WordsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/convert-to-3wa", self.base_url.trim_end_matches('/'))
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    words: Option<String>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[async_trait]
impl GeocodingService for What3WordsClient {
    async fn convert_to_words(
        &self,
        coordinate: Coordinate,
    ) -> Result<ThreeWordAddress, StoryError> {
        let coordinates = coordinate.to_string();

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("coordinates", coordinates.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| StoryError::transport(Provider::What3Words, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoryError::transport(Provider::What3Words, e.to_string()))?;

        let payload = match serde_json::from_str::<ConvertResponse>(&body) {
            Ok(payload) => payload,
            Err(_) if !status.is_success() => {
                return Err(StoryError::upstream(
                    Provider::What3Words,
                    format!("HTTP {}", status),
                ))
            }
            Err(e) => return Err(StoryError::malformed(Provider::What3Words, e.to_string())),
        };

        // Error payloads come with non-2xx statuses; the payload message wins.
        if let Some(error) = payload.error {
            return Err(StoryError::upstream(Provider::What3Words, error.message));
        }

        if !status.is_success() {
            return Err(StoryError::upstream(
                Provider::What3Words,
                format!("HTTP {}", status),
            ));
        }

        let words = payload.words.ok_or_else(|| {
            StoryError::malformed(Provider::What3Words, "response has no `words` field")
        })?;

        ThreeWordAddress::parse(&words)
    }
}

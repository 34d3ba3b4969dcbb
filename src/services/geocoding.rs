//! Address → coordinate resolution.
//!
//! [`AddressResolver`] is the seam the route orchestrator depends on; the
//! production implementation queries the Google Geocoding API and always
//! takes the first candidate. Results are not cached.

use crate::models::Coordinates;
use crate::services::google_maps::GoogleMapsClient;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Why an address could not be turned into a coordinate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeFailure {
    #[error("Google API key is not configured")]
    MissingApiKey,

    #[error("Geocoding API error: HTTP {0}")]
    Status(u16),

    #[error("No results found for the given address")]
    NoResults,

    #[error("Geocoding request failed: {0}")]
    Transport(String),

    #[error("Failed to parse geocoding response: {0}")]
    InvalidPayload(String),

    #[error("Geocoding returned an invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolve a free-text address. Never panics; every problem is a [`GeocodeFailure`].
    async fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeFailure>;
}

#[async_trait]
impl AddressResolver for GoogleMapsClient {
    async fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeFailure> {
        let api_key = self.api_key().ok_or(GeocodeFailure::MissingApiKey)?;

        tracing::debug!(address, "Geocoding address: {}", address);

        let response = self
            .client
            .get(self.endpoint("geocode"))
            .query(&[("address", address), ("key", api_key)])
            .send()
            .await
            // without_url keeps the API key out of error messages
            .map_err(|e| GeocodeFailure::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                address,
                "Geocoding API HTTP error {}: {}",
                status, error_text
            );
            return Err(GeocodeFailure::Status(status.as_u16()));
        }

        let payload: GeocodeApiResponse = response
            .json()
            .await
            .map_err(|e| GeocodeFailure::InvalidPayload(e.without_url().to_string()))?;

        tracing::debug!(
            address,
            results = payload.results.len(),
            api_status = payload.status.as_deref().unwrap_or("-"),
            "Geocoding API response: {} results",
            payload.results.len()
        );

        let Some(first) = payload.results.into_iter().next() else {
            tracing::warn!(
                address,
                api_status = payload.status.as_deref().unwrap_or("-"),
                error_message = payload.error_message.as_deref().unwrap_or("-"),
                "Geocoding API returned no results"
            );
            return Err(GeocodeFailure::NoResults);
        };

        let location = first.geometry.location;
        Coordinates::new(location.lat, location.lng).map_err(GeocodeFailure::InvalidCoordinate)
    }
}

// Google Geocoding API response types

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    #[serde(default)]
    results: Vec<GeocodeApiResult>,
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ... (logged only)
    status: Option<String>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeApiResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLocation,
}

#[derive(Debug, Deserialize)]
struct GeocodeLocation {
    lat: f64,
    lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;

    #[test]
    fn test_parse_first_result() {
        let json = r#"{
            "results": [
                {"geometry": {"location": {"lat": 35.6812, "lng": 139.7671}}},
                {"geometry": {"location": {"lat": 34.7025, "lng": 135.4959}}}
            ],
            "status": "OK"
        }"#;
        let payload: GeocodeApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.results.len(), 2);
        assert_eq!(payload.results[0].geometry.location.lat, 35.6812);
        assert_eq!(payload.status.as_deref(), Some("OK"));
    }

    #[test]
    fn test_missing_results_array_is_empty() {
        let payload: GeocodeApiResponse =
            serde_json::from_str(r#"{"status": "REQUEST_DENIED", "error_message": "bad key"}"#)
                .unwrap();
        assert!(payload.results.is_empty());
        assert_eq!(payload.error_message.as_deref(), Some("bad key"));
    }

    #[tokio::test]
    async fn test_resolve_without_key_skips_network() {
        // Unroutable base URL: reaching the network would surface a Transport error
        let client = GoogleMapsClient::with_config(
            Client::new(),
            None,
            "http://127.0.0.1:9".to_string(),
        );
        let result = client.resolve("Tokyo Station").await;
        assert_eq!(result, Err(GeocodeFailure::MissingApiKey));
    }

    #[test]
    fn test_failure_display() {
        assert!(GeocodeFailure::Status(403).to_string().contains("403"));
        assert!(GeocodeFailure::NoResults.to_string().contains("No results"));
    }
}

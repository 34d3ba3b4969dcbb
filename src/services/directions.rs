use crate::models::{Coordinates, TravelMode};
use crate::services::google_maps::GoogleMapsClient;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectionsFailure {
    #[error("Google API key is not configured")]
    MissingApiKey,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    InvalidPayload(String),
}

/// Fetches candidate routes between two resolved coordinates.
/// An empty `routes` list is a valid answer here; callers decide what it means.
#[async_trait]
pub trait DirectionsFetcher: Send + Sync {
    async fn fetch_directions(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TravelMode,
    ) -> Result<DirectionsResponse, DirectionsFailure>;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
    pub status: Option<String>,
}

impl DirectionsResponse {
    pub fn has_route(&self) -> bool {
        !self.routes.is_empty()
    }
}

/// Only presence is consulted; the summary is kept for logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: String,
}

#[async_trait]
impl DirectionsFetcher for GoogleMapsClient {
    async fn fetch_directions(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TravelMode,
    ) -> Result<DirectionsResponse, DirectionsFailure> {
        let api_key = self.api_key().ok_or(DirectionsFailure::MissingApiKey)?;

        let origin_param = origin.to_string();
        let destination_param = destination.to_string();

        tracing::debug!(
            origin = %origin_param,
            destination = %destination_param,
            mode = %mode,
            "Directions API request: {} -> {} ({})",
            origin_param, destination_param, mode
        );

        let response = self
            .client
            .get(self.endpoint("directions"))
            .query(&[
                ("origin", origin_param.as_str()),
                ("destination", destination_param.as_str()),
                ("mode", mode.google_mode()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| DirectionsFailure::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                "Directions API HTTP error {}: {}",
                status, error_text
            );
            return Err(DirectionsFailure::Status(status.as_u16()));
        }

        let directions: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| DirectionsFailure::InvalidPayload(e.without_url().to_string()))?;

        tracing::debug!(
            routes = directions.routes.len(),
            api_status = directions.status.as_deref().unwrap_or("-"),
            first_summary = directions.routes.first().map(|r| r.summary.as_str()).unwrap_or("-"),
            "Directions API response: {} routes",
            directions.routes.len()
        );

        Ok(directions)
    }
}

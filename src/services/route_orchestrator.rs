use crate::constants::GOOGLE_MAPS_DIR_URL;
use crate::models::{Coordinates, RoutePreview, RouteRequest, SharedRoute, TravelMode};
use crate::services::directions::{DirectionsFailure, DirectionsFetcher};
use crate::services::geocoding::{AddressResolver, GeocodeFailure};
use crate::services::path_interpolator;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Which side of the route an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEndpoint {
    Start,
    Destination,
}

impl fmt::Display for RouteEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteEndpoint::Start => write!(f, "start"),
            RouteEndpoint::Destination => write!(f, "destination"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("Start and destination are required: {0}")]
    MissingInput(String),

    #[error("Could not resolve {endpoint} address: {reason}")]
    GeocodingFailed {
        endpoint: RouteEndpoint,
        reason: GeocodeFailure,
    },

    #[error("Directions API error: {0}")]
    DirectionsFailed(DirectionsFailure),

    #[error("No route found between the given addresses")]
    NoRouteFound,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Turns two addresses into a shareable Google Maps route.
///
/// Steps run strictly in order and stop at the first failure:
/// validate, resolve start, resolve destination, fetch directions,
/// require a route, build the link. Nothing is retried or cached.
#[derive(Clone)]
pub struct RouteOrchestrator {
    resolver: Arc<dyn AddressResolver>,
    directions: Arc<dyn DirectionsFetcher>,
    travel_mode: TravelMode,
}

impl RouteOrchestrator {
    pub fn new(
        resolver: Arc<dyn AddressResolver>,
        directions: Arc<dyn DirectionsFetcher>,
        travel_mode: TravelMode,
    ) -> Self {
        RouteOrchestrator {
            resolver,
            directions,
            travel_mode,
        }
    }

    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    pub async fn build_route(&self, request: &RouteRequest) -> Result<SharedRoute, RouteError> {
        let (start, destination) = self.resolve_endpoints(request).await?;

        let directions = self
            .directions
            .fetch_directions(&start, &destination, self.travel_mode)
            .await
            .map_err(|failure| {
                tracing::warn!(
                    origin = %start,
                    destination = %destination,
                    "Directions lookup failed: {}",
                    failure
                );
                RouteError::DirectionsFailed(failure)
            })?;

        if !directions.has_route() {
            tracing::warn!(
                origin = %start,
                destination = %destination,
                api_status = directions.status.as_deref().unwrap_or("-"),
                "Directions API returned 0 routes"
            );
            return Err(RouteError::NoRouteFound);
        }

        let shareable_url = shareable_url(&start, &destination, self.travel_mode);
        tracing::info!(url = %shareable_url, "Generated Google Maps URL");

        Ok(SharedRoute {
            shareable_url,
            travel_mode: self.travel_mode,
        })
    }

    /// Resolve both addresses and interpolate the straight-line path between
    /// them. No directions call is made.
    pub async fn preview_route(&self, request: &RouteRequest) -> Result<RoutePreview, RouteError> {
        let (start, destination) = self.resolve_endpoints(request).await?;
        let path = path_interpolator::interpolate(&start, &destination)?;
        Ok(RoutePreview::new(start, destination, path))
    }

    async fn resolve_endpoints(
        &self,
        request: &RouteRequest,
    ) -> Result<(Coordinates, Coordinates), RouteError> {
        request.validate().map_err(RouteError::MissingInput)?;

        tracing::info!(
            start = %request.start_address.trim(),
            destination = %request.destination_address.trim(),
            mode = %self.travel_mode,
            "Route request: {} -> {}",
            request.start_address.trim(), request.destination_address.trim()
        );

        let start = self
            .resolve(RouteEndpoint::Start, &request.start_address)
            .await?;
        let destination = self
            .resolve(RouteEndpoint::Destination, &request.destination_address)
            .await?;

        Ok((start, destination))
    }

    async fn resolve(
        &self,
        endpoint: RouteEndpoint,
        address: &str,
    ) -> Result<Coordinates, RouteError> {
        let address = address.trim();
        match self.resolver.resolve(address).await {
            Ok(coords) => {
                tracing::debug!(%endpoint, address, coords = %coords, "Resolved {} address", endpoint);
                Ok(coords)
            }
            Err(reason) => {
                tracing::warn!(%endpoint, address, "Geocoding failed for {} address: {}", endpoint, reason);
                Err(RouteError::GeocodingFailed { endpoint, reason })
            }
        }
    }
}

/// Deep link that opens the route in the Google Maps viewer
pub fn shareable_url(origin: &Coordinates, destination: &Coordinates, mode: TravelMode) -> String {
    format!(
        "{}?api=1&origin={}&destination={}&travelmode={}",
        GOOGLE_MAPS_DIR_URL,
        origin,
        destination,
        mode.google_mode()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::directions::{DirectionsResponse, DirectionsRoute};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeResolver {
        known: HashMap<&'static str, Coordinates>,
        calls: AtomicUsize,
    }

    impl FakeResolver {
        fn new(known: &[(&'static str, f64, f64)]) -> Self {
            FakeResolver {
                known: known
                    .iter()
                    .map(|(name, lat, lng)| (*name, Coordinates::new(*lat, *lng).unwrap()))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AddressResolver for FakeResolver {
        async fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.known
                .get(address)
                .copied()
                .ok_or(GeocodeFailure::NoResults)
        }
    }

    struct FakeDirections {
        outcome: Result<usize, DirectionsFailure>,
        calls: AtomicUsize,
    }

    impl FakeDirections {
        fn with_routes(count: usize) -> Self {
            FakeDirections {
                outcome: Ok(count),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(failure: DirectionsFailure) -> Self {
            FakeDirections {
                outcome: Err(failure),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DirectionsFetcher for FakeDirections {
        async fn fetch_directions(
            &self,
            _origin: &Coordinates,
            _destination: &Coordinates,
            _mode: TravelMode,
        ) -> Result<DirectionsResponse, DirectionsFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let count = self.outcome.clone()?;
            Ok(DirectionsResponse {
                routes: vec![DirectionsRoute::default(); count],
                status: Some("OK".to_string()),
            })
        }
    }

    fn orchestrator(
        resolver: &Arc<FakeResolver>,
        directions: &Arc<FakeDirections>,
    ) -> RouteOrchestrator {
        RouteOrchestrator::new(resolver.clone(), directions.clone(), TravelMode::Driving)
    }

    #[tokio::test]
    async fn test_missing_destination_makes_no_calls() {
        let resolver = Arc::new(FakeResolver::new(&[("A", 35.0, 139.0)]));
        let directions = Arc::new(FakeDirections::with_routes(1));

        let result = orchestrator(&resolver, &directions)
            .build_route(&RouteRequest::new("A", "  "))
            .await;

        assert!(matches!(result, Err(RouteError::MissingInput(_))));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
        assert_eq!(directions.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_start_geocoding_failure_stops_early() {
        let resolver = Arc::new(FakeResolver::new(&[("B", 35.1, 139.1)]));
        let directions = Arc::new(FakeDirections::with_routes(1));

        let result = orchestrator(&resolver, &directions)
            .build_route(&RouteRequest::new("nowhere", "B"))
            .await;

        assert_eq!(
            result,
            Err(RouteError::GeocodingFailed {
                endpoint: RouteEndpoint::Start,
                reason: GeocodeFailure::NoResults,
            })
        );
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
        assert_eq!(directions.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_destination_geocoding_failure_tagged() {
        let resolver = Arc::new(FakeResolver::new(&[("A", 35.0, 139.0)]));
        let directions = Arc::new(FakeDirections::with_routes(1));

        let result = orchestrator(&resolver, &directions)
            .build_route(&RouteRequest::new("A", "nowhere"))
            .await;

        assert!(matches!(
            result,
            Err(RouteError::GeocodingFailed {
                endpoint: RouteEndpoint::Destination,
                ..
            })
        ));
        assert_eq!(directions.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_routes_is_no_route_found() {
        let resolver = Arc::new(FakeResolver::new(&[("A", 35.0, 139.0), ("B", 35.1, 139.1)]));
        let directions = Arc::new(FakeDirections::with_routes(0));

        let result = orchestrator(&resolver, &directions)
            .build_route(&RouteRequest::new("A", "B"))
            .await;

        assert_eq!(result, Err(RouteError::NoRouteFound));
        assert_eq!(directions.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_directions_status_propagates() {
        let resolver = Arc::new(FakeResolver::new(&[("A", 35.0, 139.0), ("B", 35.1, 139.1)]));
        let directions = Arc::new(FakeDirections::failing(DirectionsFailure::Status(503)));

        let result = orchestrator(&resolver, &directions)
            .build_route(&RouteRequest::new("A", "B"))
            .await;

        assert_eq!(
            result,
            Err(RouteError::DirectionsFailed(DirectionsFailure::Status(503)))
        );
    }

    #[tokio::test]
    async fn test_success_builds_driving_link() {
        let resolver = Arc::new(FakeResolver::new(&[("A", 35.0, 139.0), ("B", 35.1, 139.1)]));
        let directions = Arc::new(FakeDirections::with_routes(1));

        let route = orchestrator(&resolver, &directions)
            .build_route(&RouteRequest::new(" A ", "B"))
            .await
            .unwrap();

        assert_eq!(
            route.shareable_url,
            "https://www.google.com/maps/dir/?api=1&origin=35.0,139.0&destination=35.1,139.1&travelmode=driving"
        );
        assert_eq!(route.travel_mode, TravelMode::Driving);
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_preview_same_address() {
        let resolver = Arc::new(FakeResolver::new(&[("Tokyo Station", 35.6812, 139.7671)]));
        let directions = Arc::new(FakeDirections::with_routes(1));

        let preview = orchestrator(&resolver, &directions)
            .preview_route(&RouteRequest::new("Tokyo Station", "Tokyo Station"))
            .await
            .unwrap();

        assert_eq!(preview.num_points, 10);
        assert_eq!(preview.path.len(), 11);
        assert!(preview.path.iter().all(|p| *p == preview.start));
        assert_eq!(directions.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_shareable_url_uses_mode() {
        let a = Coordinates::new(35.0, 139.0).unwrap();
        let b = Coordinates::new(35.1, 139.1).unwrap();
        let url = shareable_url(&a, &b, TravelMode::Walking);
        assert!(url.ends_with("&travelmode=walking"));
    }

    #[test]
    fn test_shareable_url_near_null_island() {
        let a = Coordinates::new(5.6, 0.00005).unwrap();
        let b = Coordinates::new(0.00001, -0.00009).unwrap();
        assert_eq!(
            shareable_url(&a, &b, TravelMode::Driving),
            "https://www.google.com/maps/dir/?api=1&origin=5.6,0.00005&destination=0.00001,-0.00009&travelmode=driving"
        );
    }

    #[test]
    fn test_error_display_names_endpoint() {
        let err = RouteError::GeocodingFailed {
            endpoint: RouteEndpoint::Destination,
            reason: GeocodeFailure::Status(500),
        };
        assert!(err.to_string().contains("destination"));
        assert!(err.to_string().contains("500"));
    }
}

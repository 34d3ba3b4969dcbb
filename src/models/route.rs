use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// Value of both the directions API `mode` and the deep-link `travelmode` parameters
    pub fn google_mode(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.google_mode())
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" | "drive" | "car" => Ok(TravelMode::Driving),
            "walking" | "walk" => Ok(TravelMode::Walking),
            "bicycling" | "bike" | "cycling" => Ok(TravelMode::Bicycling),
            "transit" => Ok(TravelMode::Transit),
            _ => Err(format!("Invalid travel mode: '{}'", s)),
        }
    }
}

/// Raw query string of `/api/route` and `/api/route/preview`.
/// Both fields are optional here so a missing one maps to our own 400 body
/// instead of axum's query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteQuery {
    pub start: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start_address: String,
    pub destination_address: String,
}

impl RouteRequest {
    pub fn new(start_address: impl Into<String>, destination_address: impl Into<String>) -> Self {
        RouteRequest {
            start_address: start_address.into(),
            destination_address: destination_address.into(),
        }
    }

    /// Both addresses must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), String> {
        if self.start_address.trim().is_empty() {
            return Err("start address is required".to_string());
        }
        if self.destination_address.trim().is_empty() {
            return Err("destination address is required".to_string());
        }
        Ok(())
    }
}

impl From<RouteQuery> for RouteRequest {
    fn from(query: RouteQuery) -> Self {
        RouteRequest {
            start_address: query.start.unwrap_or_default(),
            destination_address: query.destination.unwrap_or_default(),
        }
    }
}

/// Straight-line waypoints between two coordinates.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterpolatedPath {
    pub distance_km: f64,
    /// Number of segments; `points.len() == num_points + 1`
    pub num_points: usize,
    pub points: Vec<Coordinates>,
}

impl InterpolatedPath {
    pub fn first(&self) -> Option<&Coordinates> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Coordinates> {
        self.points.last()
    }
}

/// Outcome of a successful route build: a deep link into the Google Maps viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedRoute {
    pub shareable_url: String,
    pub travel_mode: TravelMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(rename = "googleMapsUrl")]
    pub google_maps_url: String,
}

impl From<SharedRoute> for RouteResponse {
    fn from(route: SharedRoute) -> Self {
        RouteResponse {
            google_maps_url: route.shareable_url,
        }
    }
}

/// Resolved endpoints plus the interpolated path, for client-side rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePreview {
    pub start: Coordinates,
    pub destination: Coordinates,
    pub distance_km: f64,
    pub num_points: usize,
    pub path: Vec<Coordinates>,
}

impl RoutePreview {
    pub fn new(start: Coordinates, destination: Coordinates, path: InterpolatedPath) -> Self {
        RoutePreview {
            start,
            destination,
            distance_km: path.distance_km,
            num_points: path.num_points,
            path: path.points,
        }
    }
}

//! Straight-line waypoint synthesis for route previews.
//!
//! The geodesic distance only decides how many points to emit; the points
//! themselves are spaced linearly in latitude/longitude. That is close to the
//! real great-circle track for city and regional hops but drifts from it on
//! long routes (and takes the long way round across the antimeridian).
//! Callers needing true great-circle waypoints must not rely on this.

use crate::constants::{INTERPOLATION_POINTS_PER_KM, MIN_INTERPOLATION_POINTS};
use crate::models::{Coordinates, InterpolatedPath};
use crate::services::route_orchestrator::RouteError;

/// Segment count for a path of `distance_km`: 10 per km, never fewer than 10.
pub fn interpolation_points(distance_km: f64) -> usize {
    let per_km = (distance_km * INTERPOLATION_POINTS_PER_KM).floor();
    // Negative / NaN never reach here from a geodesic distance, but `as` saturates anyway
    (per_km as usize).max(MIN_INTERPOLATION_POINTS)
}

/// Build `num_points + 1` evenly spaced coordinates from `start` to `destination`.
pub fn interpolate(
    start: &Coordinates,
    destination: &Coordinates,
) -> Result<InterpolatedPath, RouteError> {
    start.validate().map_err(RouteError::InvalidCoordinate)?;
    destination
        .validate()
        .map_err(RouteError::InvalidCoordinate)?;

    let distance_km = start.geodesic_distance_km(destination);
    let num_points = interpolation_points(distance_km);

    let lat_diff = destination.lat - start.lat;
    let lng_diff = destination.lng - start.lng;
    let n = num_points as f64;

    let mut points: Vec<Coordinates> = (0..num_points)
        .map(|i| {
            let i = i as f64;
            Coordinates {
                lat: start.lat + i * lat_diff / n,
                lng: start.lng + i * lng_diff / n,
            }
        })
        .collect();
    // The formula at i == n can be off by an ulp; pin the endpoint exactly
    points.push(*destination);

    tracing::debug!(
        distance_km = %format!("{:.3}", distance_km),
        num_points,
        "Interpolated {} waypoints over {:.3}km",
        points.len(), distance_km
    );

    Ok(InterpolatedPath {
        distance_km,
        num_points,
        points,
    })
}

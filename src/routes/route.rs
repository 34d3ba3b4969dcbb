use crate::error::Result;
use crate::models::{RoutePreview, RouteQuery, RouteRequest, RouteResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

/// GET /api/route?start=..&destination=..
/// Resolve both addresses and return a Google Maps deep link for the route
pub async fn get_route(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>> {
    let request = RouteRequest::from(query);
    let route = state.route_orchestrator.build_route(&request).await?;
    Ok(Json(route.into()))
}

/// GET /api/route/preview?start=..&destination=..
/// Resolved endpoints plus evenly spaced straight-line waypoints
pub async fn get_route_preview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RoutePreview>> {
    let request = RouteRequest::from(query);
    let preview = state.route_orchestrator.preview_route(&request).await?;

    tracing::info!(
        distance_km = %format!("{:.2}", preview.distance_km),
        points = preview.path.len(),
        "Route preview: {:.2}km, {} waypoints",
        preview.distance_km, preview.path.len()
    );

    Ok(Json(preview))
}

use crate::services::directions::DirectionsFailure;
use crate::services::geocoding::GeocodeFailure;
use crate::services::route_orchestrator::RouteError;
use crate::services::weather::WeatherError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Upstream status if it is a real error code, otherwise 502
fn upstream_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code)
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

fn route_error_response(err: &RouteError) -> (StatusCode, String) {
    let message = err.to_string();
    match err {
        RouteError::MissingInput(_) => (StatusCode::BAD_REQUEST, message),
        RouteError::GeocodingFailed { reason, .. } => {
            let status = match reason {
                GeocodeFailure::NoResults => StatusCode::NOT_FOUND,
                GeocodeFailure::Status(_) | GeocodeFailure::InvalidCoordinate(_) => {
                    StatusCode::BAD_REQUEST
                }
                GeocodeFailure::Transport(_) | GeocodeFailure::InvalidPayload(_) => {
                    StatusCode::BAD_GATEWAY
                }
                GeocodeFailure::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            };
            (status, message)
        }
        RouteError::DirectionsFailed(failure) => {
            let status = match failure {
                DirectionsFailure::Status(code) => upstream_status(*code),
                DirectionsFailure::Transport(_) | DirectionsFailure::InvalidPayload(_) => {
                    StatusCode::BAD_GATEWAY
                }
                DirectionsFailure::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            };
            (status, message)
        }
        RouteError::NoRouteFound => (StatusCode::NOT_FOUND, message),
        RouteError::InvalidCoordinate(_) => (StatusCode::BAD_REQUEST, message),
    }
}

fn weather_error_response(err: &WeatherError) -> (StatusCode, String) {
    match err {
        WeatherError::Upstream(code) => (
            upstream_status(*code),
            "Could not fetch weather information".to_string(),
        ),
        WeatherError::PostalCodeNotFound => (StatusCode::NOT_FOUND, err.to_string()),
        WeatherError::Transport(_) | WeatherError::InvalidPayload(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error while fetching weather information".to_string(),
        ),
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Route(ref e) => {
                let (status, message) = route_error_response(e);
                if status.is_server_error() {
                    tracing::error!("Route error: {}", e);
                } else {
                    tracing::info!("Route request rejected: {}", e);
                }
                (status, message)
            }
            AppError::Weather(ref e) => {
                tracing::warn!("Weather error: {}", e);
                weather_error_response(e)
            }
            AppError::InvalidRequest(e) => (StatusCode::BAD_REQUEST, e),
            AppError::NotFound(e) => (StatusCode::NOT_FOUND, e),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

use crate::constants::DEFAULT_WEATHER_COUNTRY_CODE;
use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherQuery {
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostalCodeQuery {
    pub address: Option<String>,
}

fn required(value: Option<String>, message: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidRequest(message.to_string()))
}

/// GET /api/weather?postalCode=..&countryCode=JP
/// Current weather passed through from OpenWeatherMap
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Value>> {
    let postal_code = required(query.postal_code, "postalCode is required")?;
    let country_code = query
        .country_code
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_WEATHER_COUNTRY_CODE.to_string());

    let weather = state
        .weather_client
        .current_weather(&postal_code, &country_code)
        .await?;

    Ok(Json(weather))
}

/// GET /api/postal-code?address=..
pub async fn get_postal_code(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostalCodeQuery>,
) -> Result<Json<Value>> {
    let address = required(query.address, "address is required")?;
    let postal_code = state.postal_code_client.lookup(&address).await?;
    Ok(Json(json!({ "postalCode": postal_code })))
}

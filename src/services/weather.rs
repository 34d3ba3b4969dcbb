//! Weather for an itinerary stop, looked up by postal code.
//!
//! Two upstreams: an address → postal code service, and OpenWeatherMap's
//! current-weather endpoint. Both responses are passed through mostly as-is.

use crate::constants::{WEATHER_LANG, WEATHER_UNITS};
use reqwest::Client;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error("Weather API error: HTTP {0}")]
    Upstream(u16),

    #[error("Postal code not found")]
    PostalCodeNotFound,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    InvalidPayload(String),
}

/// Japanese postal codes are 7 digits; OpenWeatherMap wants them as `NNN-NNNN`.
/// Anything else is passed through untouched.
pub fn normalize_postal_code(postal_code: &str) -> String {
    let code = postal_code.trim();
    if code.len() == 7 && code.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}", &code[..3], &code[3..])
    } else {
        code.to_string()
    }
}

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn with_base_url(client: Client, api_key: String, base_url: String) -> Self {
        WeatherClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Current weather as the raw OpenWeatherMap JSON document
    pub async fn current_weather(
        &self,
        postal_code: &str,
        country_code: &str,
    ) -> Result<serde_json::Value, WeatherError> {
        let zip = format!("{},{}", normalize_postal_code(postal_code), country_code.trim());

        tracing::info!(zip = %zip, "Requesting OpenWeatherMap current weather for {}", zip);

        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("zip", zip.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", WEATHER_UNITS),
                ("lang", WEATHER_LANG),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = %status,
                zip = %zip,
                "OpenWeatherMap HTTP error {}: {}",
                status, error_text
            );
            return Err(WeatherError::Upstream(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidPayload(e.without_url().to_string()))
    }
}

#[derive(Clone)]
pub struct PostalCodeClient {
    client: Client,
    base_url: String,
}

impl PostalCodeClient {
    pub fn with_base_url(client: Client, base_url: String) -> Self {
        PostalCodeClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Postal code for a free-text address. The service answers in plain text.
    pub async fn lookup(&self, address: &str) -> Result<String, WeatherError> {
        let response = self
            .client
            .get(format!("{}/post/zipcode", self.base_url))
            .query(&[("address", address)])
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::InvalidPayload(e.without_url().to_string()))?;

        tracing::debug!(status = %status, address, "Postal code API response: {}", body);

        if !status.is_success() {
            return Err(WeatherError::PostalCodeNotFound);
        }

        let postal_code = body.trim();
        if postal_code.is_empty() {
            return Err(WeatherError::PostalCodeNotFound);
        }
        Ok(postal_code.to_string())
    }
}

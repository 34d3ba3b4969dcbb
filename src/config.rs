use crate::constants::*;
use crate::models::TravelMode;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Optional: route requests fail individually while it is absent
    pub google_api_key: Option<String>,
    pub google_maps_base_url: String,
    pub openweathermap_api_key: String,
    pub openweathermap_base_url: String,
    pub postal_code_base_url: String,
    pub http_timeout_secs: u64,
    /// Travel mode for every directions call and shared link
    pub travel_mode: TravelMode,
    pub static_dir: String,
    /// JSON file with journal records; built-in samples when unset
    pub records_path: Option<String>,
}

/// Env var, treating an empty value as unset
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let http_timeout_secs: u64 = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| "Invalid HTTP_TIMEOUT_SECS")?;

        if http_timeout_secs == 0 || http_timeout_secs > MAX_HTTP_TIMEOUT_SECS {
            return Err(format!(
                "HTTP_TIMEOUT_SECS must be between 1 and {} seconds",
                MAX_HTTP_TIMEOUT_SECS
            ));
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            // The frontend shares its key under the Next.js public name
            google_api_key: non_empty_var("GOOGLE_API_KEY")
                .or_else(|| non_empty_var("NEXT_PUBLIC_GOOGLE_API_KEY")),
            google_maps_base_url: env::var("GOOGLE_MAPS_BASE_URL")
                .unwrap_or_else(|_| GOOGLE_MAPS_API_BASE_URL.to_string()),
            openweathermap_api_key: non_empty_var("OPENWEATHERMAP_API_KEY")
                .ok_or("OPENWEATHERMAP_API_KEY must be set")?,
            openweathermap_base_url: env::var("OPENWEATHERMAP_BASE_URL")
                .unwrap_or_else(|_| OPENWEATHERMAP_BASE_URL.to_string()),
            postal_code_base_url: env::var("POSTAL_CODE_BASE_URL")
                .unwrap_or_else(|_| POSTAL_CODE_BASE_URL.to_string()),
            http_timeout_secs,
            travel_mode: env::var("ROUTE_TRAVEL_MODE")
                .unwrap_or_else(|_| TravelMode::default().to_string())
                .parse()?,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            records_path: non_empty_var("RECORDS_PATH"),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

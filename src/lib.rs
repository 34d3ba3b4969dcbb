// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::media::MediaLibrary;
use services::records::RecordStore;
use services::route_orchestrator::RouteOrchestrator;
use services::weather::{PostalCodeClient, WeatherClient};
use std::path::PathBuf;

// App state for sharing across the application
pub struct AppState {
    pub route_orchestrator: RouteOrchestrator,
    pub weather_client: WeatherClient,
    pub postal_code_client: PostalCodeClient,
    pub records: RecordStore,
    pub media: MediaLibrary,
    pub static_dir: PathBuf,
    /// Reported by the health check only
    pub google_api_key_configured: bool,
}

use axum::Router;
use shiori::config::Config;
use shiori::services::build_http_client;
use shiori::services::google_maps::GoogleMapsClient;
use shiori::services::media::MediaLibrary;
use shiori::services::records::RecordStore;
use shiori::services::route_orchestrator::RouteOrchestrator;
use shiori::services::weather::{PostalCodeClient, WeatherClient};
use shiori::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiori=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting shiori API server");
    tracing::info!("Configuration loaded successfully");

    if config.google_api_key.is_none() {
        tracing::warn!(
            "GOOGLE_API_KEY not set. Route requests will fail until it is configured."
        );
    }

    let http_client = build_http_client(config.http_timeout_secs)?;

    // Initialize services
    let google_maps = Arc::new(GoogleMapsClient::with_config(
        http_client.clone(),
        config.google_api_key.clone(),
        config.google_maps_base_url.clone(),
    ));
    let route_orchestrator =
        RouteOrchestrator::new(google_maps.clone(), google_maps.clone(), config.travel_mode);
    let weather_client = WeatherClient::with_base_url(
        http_client.clone(),
        config.openweathermap_api_key.clone(),
        config.openweathermap_base_url.clone(),
    );
    let postal_code_client =
        PostalCodeClient::with_base_url(http_client, config.postal_code_base_url.clone());

    let records = match config.records_path {
        Some(ref path) => {
            let store = RecordStore::from_json_file(path)?;
            tracing::info!("Loaded {} journal records from {}", store.len(), path);
            store
        }
        None => {
            tracing::info!("RECORDS_PATH not configured. Using sample journal records.");
            RecordStore::sample()
        }
    };

    // Create application state
    let state = Arc::new(AppState {
        route_orchestrator,
        weather_client,
        postal_code_client,
        records,
        media: MediaLibrary::new(&config.static_dir),
        static_dir: PathBuf::from(&config.static_dir),
        google_api_key_configured: google_maps.has_api_key(),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .merge(shiori::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use reqwest::Client;
use serde_json::{json, Value};
use shiori::models::TravelMode;
use shiori::services::google_maps::GoogleMapsClient;
use shiori::services::media::MediaLibrary;
use shiori::services::records::RecordStore;
use shiori::services::route_orchestrator::RouteOrchestrator;
use shiori::services::weather::{PostalCodeClient, WeatherClient};
use shiori::AppState;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceExt;

#[allow(dead_code)]
pub const TEST_GOOGLE_KEY: &str = "AIza-test-key";
#[allow(dead_code)]
pub const TEST_WEATHER_KEY: &str = "owm-test-key";

/// Google Maps client pointed at a mock server
#[allow(dead_code)]
pub fn google_client(base_url: &str, api_key: Option<&str>) -> GoogleMapsClient {
    GoogleMapsClient::with_config(
        Client::new(),
        api_key.map(str::to_string),
        base_url.to_string(),
    )
}

/// Full application router with every upstream pointed at `upstream_url`
#[allow(dead_code)]
pub fn test_app(upstream_url: &str, google_key: Option<&str>) -> Router {
    test_app_with_static_dir(upstream_url, google_key, Path::new("static"))
}

/// Like [`test_app`], serving and storing media under `static_dir`
#[allow(dead_code)]
pub fn test_app_with_static_dir(
    upstream_url: &str,
    google_key: Option<&str>,
    static_dir: &Path,
) -> Router {
    let google_maps = Arc::new(google_client(upstream_url, google_key));
    let state = Arc::new(AppState {
        route_orchestrator: RouteOrchestrator::new(
            google_maps.clone(),
            google_maps.clone(),
            TravelMode::Driving,
        ),
        weather_client: WeatherClient::with_base_url(
            Client::new(),
            TEST_WEATHER_KEY.to_string(),
            upstream_url.to_string(),
        ),
        postal_code_client: PostalCodeClient::with_base_url(Client::new(), upstream_url.to_string()),
        records: RecordStore::sample(),
        media: MediaLibrary::new(static_dir),
        static_dir: PathBuf::from(static_dir),
        google_api_key_configured: google_maps.has_api_key(),
    });

    shiori::routes::create_router(state)
}

/// Issue a GET and return status plus decoded JSON body
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

/// Send a multipart POST with a single file part
#[allow(dead_code)]
pub async fn post_multipart(
    app: Router,
    uri: &str,
    field: &str,
    file_name: &str,
    content: &[u8],
) -> (StatusCode, Value) {
    let boundary = "shiori-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Geocoding API body with a single candidate
#[allow(dead_code)]
pub fn geocode_body(lat: f64, lng: f64) -> Value {
    json!({
        "results": [
            {
                "formatted_address": "test address",
                "geometry": {
                    "location": { "lat": lat, "lng": lng },
                    "location_type": "ROOFTOP"
                }
            }
        ],
        "status": "OK"
    })
}

#[allow(dead_code)]
pub fn zero_results_body() -> Value {
    json!({ "results": [], "status": "ZERO_RESULTS" })
}

/// Directions API body with `count` routes
#[allow(dead_code)]
pub fn directions_body(count: usize) -> Value {
    let routes: Vec<Value> = (0..count)
        .map(|i| json!({ "summary": format!("Route {}", i + 1), "legs": [] }))
        .collect();
    let status = if count == 0 { "ZERO_RESULTS" } else { "OK" };
    json!({ "routes": routes, "status": status })
}

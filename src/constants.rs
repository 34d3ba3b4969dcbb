//! Stable application-wide constants.
//!
//! Default fallbacks for env-var-based configuration and the fixed
//! coefficients of the waypoint interpolation.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "5000";

// --- Upstream providers ---

/// Google Maps web-service root. Geocoding and directions live under it.
pub const GOOGLE_MAPS_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
/// Deep-link root for the Google Maps viewer.
pub const GOOGLE_MAPS_DIR_URL: &str = "https://www.google.com/maps/dir/";
/// OpenWeatherMap current-weather API root.
pub const OPENWEATHERMAP_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
/// Address to postal code lookup service root.
pub const POSTAL_CODE_BASE_URL: &str = "https://api.excelapi.org";

/// Per-request timeout for every outbound call. Overridden by `HTTP_TIMEOUT_SECS`.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
/// Upper bound accepted for `HTTP_TIMEOUT_SECS`.
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 120;

// --- Weather defaults ---

/// Country used when the client omits `countryCode`.
pub const DEFAULT_WEATHER_COUNTRY_CODE: &str = "JP";
/// Units requested from OpenWeatherMap (Celsius).
pub const WEATHER_UNITS: &str = "metric";
/// Language of the weather descriptions.
pub const WEATHER_LANG: &str = "ja";

// --- Path interpolation ---

/// Lower bound on interpolation segments, so very short hops still render smoothly.
pub const MIN_INTERPOLATION_POINTS: usize = 10;
/// Interpolation segments per kilometer of geodesic distance.
pub const INTERPOLATION_POINTS_PER_KM: f64 = 10.0;

// --- Static content ---

/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "static";

// --- Media ---

/// Uploaded photos, under the static directory.
pub const PHOTOS_SUBDIR: &str = "photos";
/// Journal illustrations, under the static directory.
pub const ILLUSTRATIONS_SUBDIR: &str = "illustrations";
/// Demo photos served under `/photo_demo`.
pub const DEMO_SUBDIR: &str = "demo";
/// Presentation served at `/pdf/slide`.
pub const SLIDE_PDF_PATH: &str = "presentation/slide.pdf";
/// Multipart field that carries the uploaded photo.
pub const PHOTO_UPLOAD_FIELD: &str = "photo";
/// Request body limit for photo uploads (20 MiB).
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

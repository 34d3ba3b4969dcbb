pub mod debug;
pub mod media;
pub mod records;
pub mod route;
pub mod weather;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::constants::{DEMO_SUBDIR, MAX_UPLOAD_BYTES, SLIDE_PDF_PATH};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    let illustrations = ServeDir::new(state.media.illustrations_dir());
    let demo_photos = ServeDir::new(state.static_dir.join(DEMO_SUBDIR));
    let slide = ServeFile::new(state.static_dir.join(SLIDE_PDF_PATH));

    Router::new()
        .route("/", get(debug::index))
        .route("/api/debug", get(debug::health_check))
        .route("/api/route", get(route::get_route))
        .route("/api/route/preview", get(route::get_route_preview))
        .route("/api/weather", get(weather::get_weather))
        .route("/api/postal-code", get(weather::get_postal_code))
        .route("/api/kiroku-data", get(records::list_records))
        .route("/api/kiroku-data/{id}", get(records::get_record))
        .route("/api/shiori-data", get(records::get_shiori_data))
        .route(
            "/api/upload-photo",
            post(media::upload_photo).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/photos", get(media::list_photos))
        .route("/api/illustrations", get(media::list_illustrations))
        .route_service("/pdf/slide", slide)
        .nest_service("/images", illustrations)
        .nest_service("/photo_demo", demo_photos)
        .nest_service("/static", static_files)
        .with_state(state)
}

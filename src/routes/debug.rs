use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /
pub async fn index() -> &'static str {
    "shiori API is running"
}

/// GET /api/debug - Check if services are configured
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    // Route building degrades per request without a key, so this is a warning only
    if state.google_api_key_configured {
        status["checks"]["google_api_key"] = json!("ok");
    } else {
        status["checks"]["google_api_key"] = json!({"error": "not configured"});
        status["status"] = json!("degraded");
    }

    status["checks"]["travel_mode"] = json!(state.route_orchestrator.travel_mode().google_mode());

    if state.static_dir.is_dir() {
        status["checks"]["static_dir"] = json!("ok");
    } else {
        status["checks"]["static_dir"] = json!({
            "error": format!("{} not found", state.static_dir.display())
        });
    }

    status["checks"]["photos_dir"] = json!(state.media.photos_dir().display().to_string());
    status["checks"]["record_count"] = json!(state.records.len());

    Json(status)
}

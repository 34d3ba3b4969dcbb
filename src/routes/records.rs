use crate::error::{AppError, Result};
use crate::models::JournalRecord;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

/// GET /api/kiroku-data
pub async fn list_records(State(state): State<Arc<AppState>>) -> Json<Vec<JournalRecord>> {
    Json(state.records.all().to_vec())
}

/// GET /api/kiroku-data/{id}
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<JournalRecord>> {
    state
        .records
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Record not found".to_string()))
}

/// GET /api/shiori-data
pub async fn get_shiori_data() -> Json<Value> {
    Json(crate::services::records::sample_shiori())
}

use crate::constants::PHOTO_UPLOAD_FIELD;
use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// POST /api/upload-photo (multipart, file in the `photo` field)
pub async fn upload_photo(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let mut multipart = multipart.map_err(|_| AppError::InvalidRequest("No file part".to_string()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Invalid upload: {}", e)))?
    {
        if field.name() != Some(PHOTO_UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().trim().to_string();
        if file_name.is_empty() {
            return Err(AppError::InvalidRequest("No selected file".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Invalid upload: {}", e)))?;

        let stored = state
            .media
            .save_photo(&file_name, &bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store photo: {}", e)))?;

        return Ok((
            StatusCode::CREATED,
            Json(json!({
                "message": "File uploaded successfully",
                "photo_id": stored.photo_id,
                "file_url": stored.file_url,
            })),
        ));
    }

    Err(AppError::InvalidRequest("No file part".to_string()))
}

/// GET /api/photos
pub async fn list_photos(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let photos = state
        .media
        .list_photos()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to list photos: {}", e)))?;
    Ok(Json(json!({ "photos": photos })))
}

/// GET /api/illustrations
pub async fn list_illustrations(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let illustrations = state
        .media
        .list_illustrations()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to list illustrations: {}", e)))?;
    Ok(Json(json!({ "illustrations": illustrations })))
}

// handlers/screens.rs - /api/screens CRUD routes

use axum::{
    extract::rejection::JsonRejection,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use super::parse_body;
use crate::database::manager::DatabaseManager;
use crate::database::models::screen::{NewScreen, ScreenPatch};
use crate::database::screens::ScreenStore;
use crate::error::ApiError;

async fn store() -> Result<ScreenStore, ApiError> {
    Ok(ScreenStore::new(DatabaseManager::pool().await?))
}

/// POST /api/screens - Create a screen
pub async fn create(body: Result<Json<Value>, JsonRejection>) -> Result<impl IntoResponse, ApiError> {
    let screen: NewScreen = parse_body(body)?;
    let created = store().await?.insert(screen).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/screens - List all screens
pub async fn list() -> Result<impl IntoResponse, ApiError> {
    let screens = store().await?.list().await?;
    Ok(Json(screens))
}

/// GET /api/screens/:id - Get one screen by its metadata ID
pub async fn get(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let screen = store()
        .await?
        .find_by_metadata_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Screen not found"))?;
    Ok(Json(screen))
}

/// PUT /api/screens/:id - Overlay supplied fields onto the stored screen
pub async fn update(
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let patch: ScreenPatch = parse_body(body)?;
    let updated = store()
        .await?
        .update_by_metadata_id(&id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found("Screen not found"))?;
    Ok(Json(updated))
}

/// DELETE /api/screens/:id - Delete one screen by its metadata ID
pub async fn delete(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let deleted = store().await?.delete_by_metadata_id(&id).await?;
    if !deleted {
        return Err(ApiError::not_found("Screen not found"));
    }
    Ok(Json(json!({ "message": "Deleted Screen" })))
}

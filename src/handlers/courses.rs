// handlers/courses.rs - read-only course catalog routes

use axum::{
    extract::Path,
    response::{IntoResponse, Json},
};

use crate::database::courses::CourseStore;
use crate::database::manager::DatabaseManager;
use crate::error::ApiError;

async fn store() -> Result<CourseStore, ApiError> {
    Ok(CourseStore::new(DatabaseManager::pool().await?))
}

/// GET /api/courses - List the full catalog
pub async fn list() -> Result<impl IntoResponse, ApiError> {
    let courses = store().await?.list().await?;
    Ok(Json(courses))
}

/// GET /api/courses/POS_ID/:pos_id - Find catalog entries by program-of-study
/// ID, returned as an array even for a single match
pub async fn find_by_pos_id(Path(pos_id): Path<i64>) -> Result<impl IntoResponse, ApiError> {
    let courses = store().await?.find_by_pos_id(pos_id).await?;
    Ok(Json(courses))
}

// handlers/students.rs - /api/students CRUD and lookup routes

use axum::{
    extract::rejection::JsonRejection,
    extract::Path,
    response::{IntoResponse, Json},
};
use serde_json::Value;

use super::parse_body;
use crate::database::manager::DatabaseManager;
use crate::database::models::student::NewStudent;
use crate::database::students::StudentStore;
use crate::error::ApiError;

async fn store() -> Result<StudentStore, ApiError> {
    Ok(StudentStore::new(DatabaseManager::pool().await?))
}

/// POST /api/students - Create a student record
pub async fn create(body: Result<Json<Value>, JsonRejection>) -> Result<impl IntoResponse, ApiError> {
    let student: NewStudent = parse_body(body)?;
    let created = store().await?.insert(student).await?;
    Ok(Json(created))
}

/// GET /api/students - List all student records
pub async fn list() -> Result<impl IntoResponse, ApiError> {
    let students = store().await?.list().await?;
    Ok(Json(students))
}

/// GET /api/students/:id - Get one student by institutional ID
pub async fn get(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let student = store()
        .await?
        .find_by_student_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;
    Ok(Json(student))
}

/// GET /api/students/studentID/:id - Find students by institutional ID,
/// returned as an array even for a single match
pub async fn find_by_student_id(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let students = store().await?.find_all_by_student_id(&id).await?;
    Ok(Json(students))
}

/// PUT /api/students/:id - Replace a student record wholesale
pub async fn update(
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let student: NewStudent = parse_body(body)?;
    let updated = store()
        .await?
        .replace_by_student_id(&id, student)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;
    Ok(Json(updated))
}

/// DELETE /api/students/:id - Delete a student record, returning it
pub async fn delete(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let deleted = store()
        .await?
        .delete_by_student_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;
    Ok(Json(deleted))
}

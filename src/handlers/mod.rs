// handlers/mod.rs - route handler modules

pub mod courses;
pub mod screens;
pub mod students;
pub mod wishlist;

use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde_json::Value;

use crate::error::ApiError;

/// Decode a request body into the handler's payload type. Transport-level
/// JSON failures map to 400, schema mismatches to 400 carrying the serde
/// message so clients can see which field was rejected.
pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(value) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    serde_json::from_value(value).map_err(|e| ApiError::validation(e.to_string()))
}

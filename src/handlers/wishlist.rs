// handlers/wishlist.rs - wishlist course lookup route

use axum::{extract::Path, response::Json};
use once_cell::sync::Lazy;

use crate::database::models::course::Course;
use crate::services::wishlist::WishlistClient;

static CLIENT: Lazy<WishlistClient> = Lazy::new(WishlistClient::from_config);

/// GET /api/students/:id/wishlist/:area - Wish-listed courses for a student
/// that satisfy a general-education area. Always responds 200; lookup
/// failures degrade to a shorter (possibly empty) list.
pub async fn for_student(Path((id, area)): Path<(String, String)>) -> Json<Vec<Course>> {
    let courses = CLIENT.wishlisted_courses(&id, &area).await;
    Json(courses)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Reference to a catalog course by its program-of-study identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    #[serde(rename = "POS_ID")]
    pub pos_id: i64,
}

/// Course references bucketed by progress. The wishlist bucket drives the
/// `/api/students/:id/wishlist/:area` lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseGroups {
    #[serde(default)]
    pub completed: Vec<CourseRef>,
    #[serde(default, rename = "inProgress")]
    pub in_progress: Vec<CourseRef>,
    #[serde(default, rename = "wishList")]
    pub wish_list: Vec<CourseRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementTag {
    #[serde(rename = "GE_ATTRIBUTE")]
    pub ge_attribute: String,
}

/// General-education requirement tags bucketed by progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementGroups {
    #[serde(default)]
    pub completed: Vec<RequirementTag>,
    #[serde(default, rename = "inProgress")]
    pub in_progress: Vec<RequirementTag>,
    #[serde(default, rename = "onWishList")]
    pub on_wish_list: Vec<RequirementTag>,
    #[serde(default)]
    pub incomplete: Vec<RequirementTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "class_standing")]
pub enum Standing {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

/// A student's academic plan. `student_id` is the institutional identifier
/// the lookup routes key on, not the row's primary key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    #[serde(rename = "studentID")]
    pub student_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Json<StudentName>>,
    pub courses: Json<CourseGroups>,
    pub undergrad_requirements: Json<RequirementGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standing: Option<Standing>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload, also used whole for PUT since updates replace the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    #[serde(rename = "studentID")]
    pub student_id: String,
    pub name: Option<StudentName>,
    #[serde(default)]
    pub courses: CourseGroups,
    #[serde(default)]
    pub undergrad_requirements: RequirementGroups,
    pub major: Option<String>,
    pub standing: Option<Standing>,
}

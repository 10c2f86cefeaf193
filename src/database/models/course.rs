use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog course. The upper-case field names come from the program-of-study
/// export the catalog was seeded from and are what the frontend matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    #[serde(rename = "POS_ID")]
    pub pos_id: i64,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "UNITS", skip_serializing_if = "Option::is_none")]
    pub units: Option<f32>,
    #[serde(rename = "GE_ATTRIBUTE", skip_serializing_if = "Option::is_none")]
    pub ge_attribute: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Whether this course satisfies the given general-education area.
    pub fn satisfies_ge_area(&self, area: &str) -> bool {
        self.ge_attribute.as_deref() == Some(area)
    }
}

/// Catalog entry as loaded from fixture files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    #[serde(rename = "POS_ID")]
    pub pos_id: i64,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "UNITS")]
    pub units: Option<f32>,
    #[serde(rename = "GE_ATTRIBUTE")]
    pub ge_attribute: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn course_parses_catalog_field_names() {
        let course: Course = serde_json::from_value(json!({
            "id": "0d7f7a51-3f47-4a5e-b9a1-24c62cf3a1fd",
            "POS_ID": 4821,
            "NAME": "Multicultural Literature",
            "UNITS": 4.0,
            "GE_ATTRIBUTE": "C2",
            "createdAt": "2024-09-01T00:00:00Z",
            "updatedAt": "2024-09-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(course.pos_id, 4821);
        assert!(course.satisfies_ge_area("C2"));
        assert!(!course.satisfies_ge_area("D2"));
    }

    #[test]
    fn course_without_ge_attribute_satisfies_nothing() {
        let course: Course = serde_json::from_value(json!({
            "id": "0d7f7a51-3f47-4a5e-b9a1-24c62cf3a1fd",
            "POS_ID": 3000,
            "NAME": "Capstone Seminar",
            "createdAt": "2024-09-01T00:00:00Z",
            "updatedAt": "2024-09-01T00:00:00Z"
        }))
        .unwrap();

        assert!(!course.satisfies_ge_area("C2"));
        // omitted optional fields stay off the wire
        let value = serde_json::to_value(&course).unwrap();
        assert!(value.get("GE_ATTRIBUTE").is_none());
        assert!(value.get("UNITS").is_none());
    }
}

use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::course::{Course, NewCourse};

/// Read-mostly access to the course catalog. The API only ever serves the
/// catalog; rows arrive through fixture loads.
pub struct CourseStore {
    pool: PgPool,
}

impl CourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, course: NewCourse) -> Result<Course, DatabaseError> {
        let created = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (id, pos_id, name, units, ge_attribute)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(uuid::Uuid::new_v4())
        .bind(course.pos_id)
        .bind(course.name)
        .bind(course.units)
        .bind(course.ge_attribute)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Course>, DatabaseError> {
        let courses = sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY pos_id")
            .fetch_all(&self.pool)
            .await?;

        Ok(courses)
    }

    /// All catalog entries carrying the program-of-study identifier.
    pub async fn find_by_pos_id(&self, pos_id: i64) -> Result<Vec<Course>, DatabaseError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT * FROM courses WHERE pos_id = $1 ORDER BY created_at",
        )
        .bind(pos_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }
}

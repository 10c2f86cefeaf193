use sqlx::types::Json;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::student::{NewStudent, Student};

/// Data access for the students collection, keyed on the institutional
/// `student_id` rather than the row's primary key.
pub struct StudentStore {
    pool: PgPool,
}

impl StudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, student: NewStudent) -> Result<Student, DatabaseError> {
        let created = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (id, student_id, name, courses, undergrad_requirements, major, standing)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(uuid::Uuid::new_v4())
        .bind(student.student_id)
        .bind(student.name.map(Json))
        .bind(Json(student.courses))
        .bind(Json(student.undergrad_requirements))
        .bind(student.major)
        .bind(student.standing)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Student>, DatabaseError> {
        let students = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(students)
    }

    /// First matching record, for the single-document GET route.
    pub async fn find_by_student_id(&self, student_id: &str) -> Result<Option<Student>, DatabaseError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE student_id = $1 ORDER BY created_at LIMIT 1",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// All matching records, for the Mongo-style array find route.
    pub async fn find_all_by_student_id(&self, student_id: &str) -> Result<Vec<Student>, DatabaseError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE student_id = $1 ORDER BY created_at",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    /// Whole-record replace. Returns None when no record matches.
    pub async fn replace_by_student_id(
        &self,
        student_id: &str,
        student: NewStudent,
    ) -> Result<Option<Student>, DatabaseError> {
        let updated = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students SET
                student_id = $2, name = $3, courses = $4,
                undergrad_requirements = $5, major = $6, standing = $7,
                updated_at = now()
            WHERE id = (SELECT id FROM students WHERE student_id = $1 ORDER BY created_at LIMIT 1)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(student.student_id)
        .bind(student.name.map(Json))
        .bind(Json(student.courses))
        .bind(Json(student.undergrad_requirements))
        .bind(student.major)
        .bind(student.standing)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete the first matching record and hand it back, None when absent.
    pub async fn delete_by_student_id(&self, student_id: &str) -> Result<Option<Student>, DatabaseError> {
        let deleted = sqlx::query_as::<_, Student>(
            r#"
            DELETE FROM students
            WHERE id = (SELECT id FROM students WHERE student_id = $1 ORDER BY created_at LIMIT 1)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted)
    }
}

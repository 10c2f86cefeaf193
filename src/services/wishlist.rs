use thiserror::Error;
use tracing::error;

use crate::config;
use crate::database::models::course::Course;
use crate::database::models::student::Student;

#[derive(Debug, Error)]
pub enum WishlistError {
    #[error("internal request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("student {0} not found")]
    StudentNotFound(String),

    #[error("course {0} not found in catalog")]
    CourseNotFound(i64),
}

/// Resolves a student's wish-listed courses against the catalog by calling
/// back into the public lookup routes, one request per course, mirroring how
/// the frontend would assemble the same view.
pub struct WishlistClient {
    http: reqwest::Client,
    base_url: String,
}

impl WishlistClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Client targeting this process via the configured internal base URL.
    pub fn from_config() -> Self {
        Self::new(config::config().internal_base_url())
    }

    /// Wish-listed courses for `student_id` that satisfy `ge_area`, in
    /// wishlist order.
    ///
    /// Failures never propagate to the caller: an unknown student yields an
    /// empty list, and a failure partway through the chain yields whatever
    /// matched before it. The error itself is logged.
    pub async fn wishlisted_courses(&self, student_id: &str, ge_area: &str) -> Vec<Course> {
        let mut matched = Vec::new();
        if let Err(err) = self.collect_matches(student_id, ge_area, &mut matched).await {
            error!(%student_id, %ge_area, error = %err, "wishlist lookup aborted");
        }
        matched
    }

    async fn collect_matches(
        &self,
        student_id: &str,
        ge_area: &str,
        matched: &mut Vec<Course>,
    ) -> Result<(), WishlistError> {
        let url = format!("{}/api/students/studentID/{}", self.base_url, student_id);
        let students: Vec<Student> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let student = students
            .into_iter()
            .next()
            .ok_or_else(|| WishlistError::StudentNotFound(student_id.to_string()))?;

        for course_ref in &student.courses.wish_list {
            let url = format!("{}/api/courses/POS_ID/{}", self.base_url, course_ref.pos_id);
            let courses: Vec<Course> = self
                .http
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            let course = courses
                .into_iter()
                .next()
                .ok_or(WishlistError::CourseNotFound(course_ref.pos_id))?;

            if course.satisfies_ge_area(ge_area) {
                matched.push(course);
            }
        }

        Ok(())
    }
}

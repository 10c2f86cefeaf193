use sqlx::types::Json;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::screen::{NewScreen, Screen, ScreenPatch};

/// Data access for the screens collection. Lookups key on the embedded
/// `metadata.ID`, taking the first match when duplicates exist.
pub struct ScreenStore {
    pool: PgPool,
}

impl ScreenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, screen: NewScreen) -> Result<Screen, DatabaseError> {
        let created = sqlx::query_as::<_, Screen>(
            r#"
            INSERT INTO screens (
                id, metadata, header, element_fields, bookmark_data, content,
                region_content, content_container_width, content_style,
                content_background_image, content_background_color,
                body_background_image, body_background_color, footer_text_color,
                hide_back_to_top, back_to_top_background_color, back_to_top_text_color
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(uuid::Uuid::new_v4())
        .bind(Json(screen.metadata))
        .bind(Json(screen.header))
        .bind(Json(screen.element_fields))
        .bind(screen.bookmark_data)
        .bind(Json(screen.content))
        .bind(Json(screen.region_content))
        .bind(screen.content_container_width)
        .bind(screen.content_style)
        .bind(screen.content_background_image)
        .bind(screen.content_background_color)
        .bind(screen.body_background_image)
        .bind(screen.body_background_color)
        .bind(screen.footer_text_color)
        .bind(screen.hide_back_to_top)
        .bind(screen.back_to_top_background_color)
        .bind(screen.back_to_top_text_color)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Screen>, DatabaseError> {
        let screens = sqlx::query_as::<_, Screen>("SELECT * FROM screens ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(screens)
    }

    pub async fn find_by_metadata_id(&self, metadata_id: &str) -> Result<Option<Screen>, DatabaseError> {
        let screen = sqlx::query_as::<_, Screen>(
            "SELECT * FROM screens WHERE metadata->>'ID' = $1 ORDER BY created_at LIMIT 1",
        )
        .bind(metadata_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(screen)
    }

    /// Overlay `patch` onto the stored screen and persist the result.
    /// Returns None when no screen carries the metadata ID.
    pub async fn update_by_metadata_id(
        &self,
        metadata_id: &str,
        patch: ScreenPatch,
    ) -> Result<Option<Screen>, DatabaseError> {
        let Some(mut screen) = self.find_by_metadata_id(metadata_id).await? else {
            return Ok(None);
        };
        patch.apply(&mut screen);

        let updated = sqlx::query_as::<_, Screen>(
            r#"
            UPDATE screens SET
                metadata = $2, header = $3, element_fields = $4, bookmark_data = $5,
                content = $6, region_content = $7, content_container_width = $8,
                content_style = $9, content_background_image = $10,
                content_background_color = $11, body_background_image = $12,
                body_background_color = $13, footer_text_color = $14,
                hide_back_to_top = $15, back_to_top_background_color = $16,
                back_to_top_text_color = $17, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(screen.id)
        .bind(screen.metadata)
        .bind(screen.header)
        .bind(screen.element_fields)
        .bind(screen.bookmark_data)
        .bind(screen.content)
        .bind(screen.region_content)
        .bind(screen.content_container_width)
        .bind(screen.content_style)
        .bind(screen.content_background_image)
        .bind(screen.content_background_color)
        .bind(screen.body_background_image)
        .bind(screen.body_background_color)
        .bind(screen.footer_text_color)
        .bind(screen.hide_back_to_top)
        .bind(screen.back_to_top_background_color)
        .bind(screen.back_to_top_text_color)
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(updated))
    }

    /// Delete the first screen matching the metadata ID. Returns whether a
    /// row was removed.
    pub async fn delete_by_metadata_id(&self, metadata_id: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "DELETE FROM screens WHERE id = (SELECT id FROM screens WHERE metadata->>'ID' = $1 ORDER BY created_at LIMIT 1)",
        )
        .bind(metadata_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `videos` table.

use sqlx::PgPool;
use wanderistan_core::types::DbId;

use crate::models::video::{CreateVideo, Video};

const COLUMNS: &str = "id, place_id, youtube_url, title, thumbnail_url, created_at, updated_at";

/// Provides CRUD operations for stored videos.
pub struct VideoRepo;

impl VideoRepo {
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (place_id, youtube_url, title, thumbnail_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(input.place_id)
            .bind(&input.youtube_url)
            .bind(&input.title)
            .bind(&input.thumbnail_url)
            .fetch_one(pool)
            .await
    }

    /// All stored videos, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// Videos of any of the given places, grouped by place.
    pub async fn list_for_places(
        pool: &PgPool,
        place_ids: &[DbId],
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos WHERE place_id = ANY($1) ORDER BY place_id, id"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(place_ids)
            .fetch_all(pool)
            .await
    }
}

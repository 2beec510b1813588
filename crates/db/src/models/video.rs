//! Stored video entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wanderistan_core::error::CoreError;
use wanderistan_core::types::{DbId, Timestamp};
use wanderistan_core::video;

/// A YouTube video attached to a place, from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub place_id: DbId,
    pub youtube_url: String,
    pub title: String,
    pub thumbnail_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Video {
    pub fn video_id(&self) -> &str {
        video::video_id(&self.youtube_url)
    }

    pub fn embed_url(&self) -> String {
        video::embed_url(self.video_id())
    }
}

/// DTO for creating a stored video.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub place_id: DbId,
    pub youtube_url: String,
    pub title: String,
    pub thumbnail_url: String,
}

impl CreateVideo {
    pub fn validate(&self) -> Result<(), CoreError> {
        video::validate_video(&self.youtube_url, &self.title, &self.thumbnail_url)
    }
}

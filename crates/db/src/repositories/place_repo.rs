//! Repository for the `places` table.

use sqlx::PgPool;
use wanderistan_core::types::DbId;

use crate::models::place::{CreatePlace, Place, PlaceFilter};

const COLUMNS: &str = "id, name, description, latitude, longitude, region, category, \
                       cover_image_url, featured, created_at, updated_at";

/// Provides queries over curated places.
pub struct PlaceRepo;

impl PlaceRepo {
    pub async fn create(pool: &PgPool, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (name, description, latitude, longitude, region, category,
                                 cover_image_url, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.region)
            .bind(&input.category)
            .bind(&input.cover_image_url)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Place>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List places ordered by name, applying whichever filters are present.
    ///
    /// `search` matches name or description case-insensitively.
    pub async fn list(pool: &PgPool, filter: &PlaceFilter) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::TEXT IS NULL OR region = $2)
               AND ($3::TEXT IS NULL
                    OR name ILIKE '%' || $3 || '%'
                    OR description ILIKE '%' || $3 || '%')
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(filter.category())
            .bind(filter.region())
            .bind(filter.search())
            .fetch_all(pool)
            .await
    }

    /// Featured places, oldest first.
    pub async fn featured(pool: &PgPool, limit: i64) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places WHERE featured ORDER BY created_at, id LIMIT $1"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Other places in the same region as `place`.
    pub async fn related(
        pool: &PgPool,
        place: &Place,
        limit: i64,
    ) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places
             WHERE region = $1 AND id <> $2
             ORDER BY name, id
             LIMIT $3"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&place.region)
            .bind(place.id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Places referenced by a trip's itinerary, each listed once.
    pub async fn list_for_trip(pool: &PgPool, trip_id: DbId) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places
             WHERE id IN (SELECT place_id FROM itinerary_items WHERE trip_id = $1)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

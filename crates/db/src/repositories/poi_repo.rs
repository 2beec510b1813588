//! Repository for the `pois` table.

use sqlx::PgPool;
use wanderistan_core::poi::BoundingBox;
use wanderistan_core::types::DbId;

use crate::models::poi::{CreatePoi, Poi};

const COLUMNS: &str = "id, name, poi_type, latitude, longitude, description, price, rating, \
                       amenities, opening_hours, contact_info, website, verified, \
                       likes_count, reviews_count, created_at, updated_at";

/// Provides queries over points of interest.
pub struct PoiRepo;

impl PoiRepo {
    /// Insert a POI. Community submissions pass `verified = false`.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePoi,
        verified: bool,
    ) -> Result<Poi, sqlx::Error> {
        let query = format!(
            "INSERT INTO pois (name, poi_type, latitude, longitude, description, price, rating,
                               amenities, opening_hours, contact_info, website, verified)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Poi>(&query)
            .bind(&input.name)
            .bind(&input.poi_type)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.rating)
            .bind(&input.amenities)
            .bind(&input.opening_hours)
            .bind(&input.contact_info)
            .bind(&input.website)
            .bind(verified)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Poi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pois WHERE id = $1");
        sqlx::query_as::<_, Poi>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Verified POIs inside `bbox` (edges inclusive), optionally of one type.
    pub async fn verified_in_bounds(
        pool: &PgPool,
        bbox: &BoundingBox,
        poi_type: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Poi>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pois
             WHERE verified
               AND latitude BETWEEN $1 AND $2
               AND longitude BETWEEN $3 AND $4
               AND ($5::TEXT IS NULL OR poi_type = $5)
             ORDER BY id
             LIMIT $6"
        );
        sqlx::query_as::<_, Poi>(&query)
            .bind(bbox.sw_lat)
            .bind(bbox.ne_lat)
            .bind(bbox.sw_lng)
            .bind(bbox.ne_lng)
            .bind(poi_type)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Verified POIs whose name contains `query`, case-insensitively.
    pub async fn search_verified(
        pool: &PgPool,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Poi>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM pois
             WHERE verified AND name ILIKE '%' || $1 || '%'
             ORDER BY name, id
             LIMIT $2"
        );
        sqlx::query_as::<_, Poi>(&sql)
            .bind(query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All POIs whose name contains `query`, verified first, then most liked.
    pub async fn community_search(
        pool: &PgPool,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Poi>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM pois
             WHERE name ILIKE '%' || $1 || '%'
             ORDER BY verified DESC, likes_count DESC, id
             LIMIT $2"
        );
        sqlx::query_as::<_, Poi>(&sql)
            .bind(query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Atomically add one like. Returns the new count, or `None` if the POI
    /// does not exist.
    pub async fn like(pool: &PgPool, id: DbId) -> Result<Option<i32>, sqlx::Error> {
        let row: Option<(i32,)> = sqlx::query_as(
            "UPDATE pois SET likes_count = likes_count + 1 WHERE id = $1 RETURNING likes_count",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(count,)| count))
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pois")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

//! Repository for the `itinerary_items` table.

use sqlx::PgPool;
use wanderistan_core::types::DbId;

use crate::models::itinerary_item::{CreateItineraryItem, ItineraryItem};

const COLUMNS: &str = "id, trip_id, place_id, day, title, description, created_at, updated_at";

/// Provides CRUD operations for itinerary items.
pub struct ItineraryItemRepo;

impl ItineraryItemRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateItineraryItem,
    ) -> Result<ItineraryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO itinerary_items (trip_id, place_id, day, title, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItineraryItem>(&query)
            .bind(input.trip_id)
            .bind(input.place_id)
            .bind(input.day)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Items of a trip ordered by day, then insertion.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<ItineraryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM itinerary_items WHERE trip_id = $1 ORDER BY day, id"
        );
        sqlx::query_as::<_, ItineraryItem>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Highest scheduled day of a trip, or `None` when it has no items.
    pub async fn max_day(pool: &PgPool, trip_id: DbId) -> Result<Option<i32>, sqlx::Error> {
        let (max,): (Option<i32>,) =
            sqlx::query_as("SELECT MAX(day) FROM itinerary_items WHERE trip_id = $1")
                .bind(trip_id)
                .fetch_one(pool)
                .await?;
        Ok(max)
    }

    /// Remove every item of a trip that points at `place_id`. Returns the
    /// number of rows removed.
    pub async fn delete_for_place(
        pool: &PgPool,
        trip_id: DbId,
        place_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM itinerary_items WHERE trip_id = $1 AND place_id = $2")
                .bind(trip_id)
                .bind(place_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}

//! Repository for the `trips` table.
//!
//! Every read and write is scoped to the owning user; a trip belonging to
//! someone else behaves exactly like a missing one.

use chrono::NaiveDate;
use sqlx::PgPool;
use wanderistan_core::trip::TripStatus;
use wanderistan_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip, UpdateTrip};

const COLUMNS: &str = "id, user_id, title, destination, start_date, end_date, budget, \
                       ai_summary, itinerary, budget_estimate, budget_breakdown, \
                       money_saving_tips, created_at, updated_at";

/// Provides CRUD operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTrip,
    ) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (user_id, title, destination, start_date, end_date, budget,
                                ai_summary, itinerary, budget_estimate, budget_breakdown,
                                money_saving_tips)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.destination)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(&input.ai_summary)
            .bind(&input.itinerary)
            .bind(&input.budget_estimate)
            .bind(&input.budget_breakdown)
            .bind(&input.money_saving_tips)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by ID, only if owned by `user_id`.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's trips, newest first, optionally narrowed to a status
    /// relative to `today`.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<TripStatus>,
        today: NaiveDate,
    ) -> Result<Vec<Trip>, sqlx::Error> {
        let status_clause = match status {
            None => "",
            Some(TripStatus::Upcoming) => "AND start_date > $2",
            Some(TripStatus::Current) => "AND start_date <= $2 AND end_date >= $2",
            Some(TripStatus::Past) => "AND end_date < $2",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM trips
             WHERE user_id = $1 {status_clause}
             ORDER BY created_at DESC, id DESC"
        );
        let mut q = sqlx::query_as::<_, Trip>(&query).bind(user_id);
        if status.is_some() {
            q = q.bind(today);
        }
        q.fetch_all(pool).await
    }

    /// Most recently created trips of a user.
    pub async fn list_recent_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Replace every writable column of a trip.
    ///
    /// Returns `None` if no trip with the given `id` is owned by `user_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateTrip,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET
                title = $3,
                destination = $4,
                start_date = $5,
                end_date = $6,
                budget = $7,
                ai_summary = $8,
                itinerary = $9,
                budget_estimate = $10,
                budget_breakdown = $11,
                money_saving_tips = $12
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.destination)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(&input.ai_summary)
            .bind(&input.itinerary)
            .bind(&input.budget_estimate)
            .bind(&input.budget_breakdown)
            .bind(&input.money_saving_tips)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trip and, by cascade, its itinerary items. Returns `true` if
    /// a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Trip entity model and DTOs.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wanderistan_core::budget;
use wanderistan_core::error::CoreError;
use wanderistan_core::trip::{duration_days, validate_trip, TripStatus};
use wanderistan_core::types::{DbId, Timestamp};

/// A trip row from the `trips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: i64,
    pub ai_summary: Option<String>,
    /// Generated day-by-day plan as returned by the itinerary generator.
    pub itinerary: Option<serde_json::Value>,
    pub budget_estimate: Option<String>,
    /// Category → amount, possibly as currency strings (`"₹8,750"`).
    pub budget_breakdown: Option<serde_json::Value>,
    pub money_saving_tips: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Trip {
    pub fn duration_days(&self) -> i64 {
        duration_days(self.start_date, self.end_date)
    }

    pub fn status(&self, today: NaiveDate) -> TripStatus {
        TripStatus::on(today, self.start_date, self.end_date)
    }

    /// Stored breakdown with every value reduced to an integer amount.
    /// Empty when nothing is stored.
    pub fn breakdown_amounts(&self) -> BTreeMap<String, i64> {
        self.budget_breakdown
            .as_ref()
            .map(budget::normalize_breakdown)
            .unwrap_or_default()
    }

    /// Stored tips as strings; non-string entries are skipped.
    pub fn tips(&self) -> Vec<String> {
        match &self.money_saving_tips {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|tip| tip.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Sum of the stored breakdown, or the default share of the budget.
    pub fn total_cost(&self) -> i64 {
        budget::total_cost(self.budget, Some(&self.breakdown_amounts()))
    }

    pub fn savings(&self) -> i64 {
        budget::savings(self.budget, Some(&self.breakdown_amounts()))
    }
}

/// DTO for creating a trip. The owning user comes from the request context.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrip {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: i64,
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub itinerary: Option<serde_json::Value>,
    #[serde(default)]
    pub budget_estimate: Option<String>,
    #[serde(default)]
    pub budget_breakdown: Option<serde_json::Value>,
    #[serde(default)]
    pub money_saving_tips: Option<serde_json::Value>,
}

impl CreateTrip {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_trip(
            &self.title,
            &self.destination,
            self.start_date,
            self.end_date,
            self.budget,
        )
    }
}

/// DTO for replacing every writable column of a trip.
///
/// Plan columns omitted from the body are cleared.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrip {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: i64,
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub itinerary: Option<serde_json::Value>,
    #[serde(default)]
    pub budget_estimate: Option<String>,
    #[serde(default)]
    pub budget_breakdown: Option<serde_json::Value>,
    #[serde(default)]
    pub money_saving_tips: Option<serde_json::Value>,
}

impl UpdateTrip {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_trip(
            &self.title,
            &self.destination,
            self.start_date,
            self.end_date,
            self.budget,
        )
    }
}

//! Itinerary item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wanderistan_core::itinerary::day_label;
use wanderistan_core::types::{DbId, Timestamp};

/// One scheduled entry in a trip, from the `itinerary_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItineraryItem {
    pub id: DbId,
    pub trip_id: DbId,
    pub place_id: Option<DbId>,
    pub day: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ItineraryItem {
    pub fn day_label(&self) -> String {
        day_label(self.day)
    }
}

/// DTO for creating an itinerary item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItineraryItem {
    pub trip_id: DbId,
    pub place_id: Option<DbId>,
    pub day: i32,
    pub title: String,
    pub description: Option<String>,
}

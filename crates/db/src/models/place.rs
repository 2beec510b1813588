//! Place entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wanderistan_core::error::CoreError;
use wanderistan_core::place::{map_url, validate_place};
use wanderistan_core::types::{DbId, Timestamp};

/// A curated destination row from the `places` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    pub category: String,
    pub cover_image_url: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Place {
    /// `[latitude, longitude]`, the order map pins are written in.
    pub fn coordinates(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    pub fn map_url(&self) -> String {
        map_url(self.latitude, self.longitude)
    }
}

/// DTO for creating a place.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    pub category: String,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl CreatePlace {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_place(
            &self.name,
            self.latitude,
            self.longitude,
            &self.region,
            &self.category,
        )
    }
}

/// Optional list filters. Blank values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceFilter {
    pub category: Option<String>,
    pub region: Option<String>,
    pub search: Option<String>,
}

impl PlaceFilter {
    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        Self::present(&self.category)
    }

    pub fn region(&self) -> Option<&str> {
        Self::present(&self.region)
    }

    pub fn search(&self) -> Option<&str> {
        Self::present(&self.search)
    }
}

//! Point-of-interest entity model, DTOs, and GeoJSON rendering.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wanderistan_core::error::CoreError;
use wanderistan_core::poi::{price_range, type_name, validate_poi, Feature};
use wanderistan_core::types::{DbId, LngLat, Timestamp};

/// A row from the `pois` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Poi {
    pub id: DbId,
    pub name: String,
    pub poi_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub amenities: Option<serde_json::Value>,
    pub opening_hours: Option<serde_json::Value>,
    pub contact_info: Option<String>,
    pub website: Option<String>,
    pub verified: bool,
    pub likes_count: i32,
    pub reviews_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Poi {
    /// `[longitude, latitude]`, GeoJSON order.
    pub fn coordinates(&self) -> LngLat {
        [self.longitude, self.latitude]
    }

    pub fn type_name(&self) -> String {
        type_name(&self.poi_type)
    }

    pub fn price_range(&self) -> Option<&'static str> {
        price_range(self.price)
    }

    pub fn to_feature(&self) -> Feature<PoiProperties> {
        Feature::point(self.coordinates(), PoiProperties::from(self))
    }
}

/// GeoJSON `properties` of a POI feature.
#[derive(Debug, Clone, Serialize)]
pub struct PoiProperties {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub poi_type: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub price_range: Option<&'static str>,
    pub amenities: Option<serde_json::Value>,
    pub opening_hours: Option<serde_json::Value>,
    pub contact_info: Option<String>,
    pub website: Option<String>,
    pub verified: bool,
}

impl From<&Poi> for PoiProperties {
    fn from(poi: &Poi) -> Self {
        Self {
            id: poi.id,
            name: poi.name.clone(),
            poi_type: poi.poi_type.clone(),
            description: poi.description.clone(),
            price: poi.price,
            rating: poi.rating,
            price_range: poi.price_range(),
            amenities: poi.amenities.clone(),
            opening_hours: poi.opening_hours.clone(),
            contact_info: poi.contact_info.clone(),
            website: poi.website.clone(),
            verified: poi.verified,
        }
    }
}

/// DTO for creating a POI. Verification is decided by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePoi {
    pub name: String,
    pub poi_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub amenities: Option<serde_json::Value>,
    pub opening_hours: Option<serde_json::Value>,
    pub contact_info: Option<String>,
    pub website: Option<String>,
}

impl CreatePoi {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_poi(
            &self.name,
            &self.poi_type,
            self.latitude,
            self.longitude,
            self.price,
            self.rating,
        )
    }
}

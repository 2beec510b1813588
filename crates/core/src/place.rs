//! Curated place constants and validation.

use crate::error::CoreError;
use crate::validation::{check_coordinates, FieldErrors};

/// Allowed place categories.
pub const CATEGORIES: &[&str] = &[
    "Beach",
    "Mountain",
    "City",
    "Temple",
    "Museum",
    "Restaurant",
    "Adventure",
    "Cultural",
    "Historical",
];

/// Allowed place regions.
pub const REGIONS: &[&str] = &[
    "North India",
    "South India",
    "East India",
    "West India",
    "Central India",
    "Himalayas",
    "Coastal",
];

/// Number of same-region places shown alongside a place.
pub const RELATED_PLACES_LIMIT: i64 = 3;

/// Number of featured places on the home page.
pub const FEATURED_PLACES_LIMIT: i64 = 6;

/// Validate the writable fields of a place.
pub fn validate_place(
    name: &str,
    latitude: f64,
    longitude: f64,
    region: &str,
    category: &str,
) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    errors.require_present("name", name);
    check_coordinates(&mut errors, latitude, longitude);
    errors.require_one_of("region", region, REGIONS);
    errors.require_one_of("category", category, CATEGORIES);
    errors.finish()
}

/// Google Maps link centred on the coordinates.
pub fn map_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps?q={latitude},{longitude}")
}

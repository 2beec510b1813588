//! Point-of-interest rules, bounding boxes, and GeoJSON shapes.

use serde::Serialize;

use crate::error::CoreError;
use crate::naming::titleize;
use crate::types::LngLat;
use crate::validation::{check_coordinates, FieldErrors};

/// Types a POI may be stored with.
pub const POI_TYPES: &[&str] = &["hostel", "camping", "trail", "food", "cultural"];

/// Extra types offered to backpackers in pickers.
pub const BACKPACKER_TYPES: &[&str] = &["food", "stay", "experience", "transport"];

/// Kilometres per degree used by the near-point box approximation.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Default radius for [`BoundingBox::around`].
pub const DEFAULT_NEAR_RADIUS_KM: f64 = 5.0;

/// Maximum POIs returned for a map viewport.
pub const BOUNDS_LIMIT: i64 = 100;
/// Maximum POIs returned per route segment.
pub const SEGMENT_LIMIT: i64 = 10;
/// Maximum verified POIs returned by typeahead search.
pub const SEARCH_LIMIT: i64 = 5;
/// Maximum POIs returned by community search.
pub const COMMUNITY_SEARCH_LIMIT: i64 = 10;

/// Validate the writable fields of a POI.
pub fn validate_poi(
    name: &str,
    poi_type: &str,
    latitude: f64,
    longitude: f64,
    price: Option<f64>,
    rating: Option<f64>,
) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    errors.require_present("name", name);
    errors.require_one_of("poi_type", poi_type, POI_TYPES);
    check_coordinates(&mut errors, latitude, longitude);
    if let Some(price) = price {
        if !price.is_finite() || price < 0.0 {
            errors.add("price must be greater than or equal to 0");
        }
    }
    if let Some(rating) = rating {
        errors.require_range("rating", rating, 0.0, 5.0);
    }
    errors.finish()
}

/// A picker option: display label and stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeOption {
    pub label: String,
    pub value: &'static str,
}

/// Stored and backpacker types, deduplicated, in first-seen order.
pub fn selectable_types() -> Vec<TypeOption> {
    let mut seen: Vec<&'static str> = Vec::new();
    for value in POI_TYPES.iter().chain(BACKPACKER_TYPES) {
        if !seen.contains(value) {
            seen.push(*value);
        }
    }
    seen.into_iter()
        .map(|value| TypeOption {
            label: titleize(value),
            value,
        })
        .collect()
}

/// Human-readable type label.
pub fn type_name(poi_type: &str) -> String {
    titleize(poi_type)
}

/// Rupee price band: up to 500 is `₹`, up to 1500 is `₹₹`, above is `₹₹₹`.
pub fn price_range(price: Option<f64>) -> Option<&'static str> {
    let price = price?;
    Some(if price <= 500.0 {
        "₹"
    } else if price <= 1500.0 {
        "₹₹"
    } else {
        "₹₹₹"
    })
}

// ---------------------------------------------------------------------------
// Bounding boxes
// ---------------------------------------------------------------------------

/// An axis-aligned latitude/longitude box (inclusive on all edges).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub sw_lat: f64,
    pub sw_lng: f64,
    pub ne_lat: f64,
    pub ne_lng: f64,
}

impl BoundingBox {
    /// Parse a map viewport string `"sw_lng,sw_lat,ne_lng,ne_lat"`.
    pub fn parse(bounds: &str) -> Result<Self, CoreError> {
        let parts = bounds
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid_bounds(bounds))?;

        let [sw_lng, sw_lat, ne_lng, ne_lat] = parts[..] else {
            return Err(invalid_bounds(bounds));
        };
        if [sw_lng, sw_lat, ne_lng, ne_lat].iter().any(|v| !v.is_finite()) {
            return Err(invalid_bounds(bounds));
        }
        Ok(Self {
            sw_lat,
            sw_lng,
            ne_lat,
            ne_lng,
        })
    }

    /// Square box of `radius_km` around a point, using 1 degree ≈ 111 km on
    /// both axes.
    pub fn around(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        let delta = radius_km / KM_PER_DEGREE;
        Self {
            sw_lat: latitude - delta,
            sw_lng: longitude - delta,
            ne_lat: latitude + delta,
            ne_lng: longitude + delta,
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.sw_lat..=self.ne_lat).contains(&latitude)
            && (self.sw_lng..=self.ne_lng).contains(&longitude)
    }
}

fn invalid_bounds(bounds: &str) -> CoreError {
    CoreError::Validation(format!(
        "bounds must be 'sw_lng,sw_lat,ne_lng,ne_lat', got '{bounds}'"
    ))
}

/// Midpoint of each consecutive pair of route coordinates, as
/// `(latitude, longitude)`.
pub fn segment_midpoints(coordinates: &[LngLat]) -> Vec<(f64, f64)> {
    coordinates
        .windows(2)
        .map(|pair| {
            let [start, finish] = [pair[0], pair[1]];
            ((start[1] + finish[1]) / 2.0, (start[0] + finish[0]) / 2.0)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// GeoJSON
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: LngLat,
}

/// A GeoJSON `Feature` with a point geometry.
#[derive(Debug, Clone, Serialize)]
pub struct Feature<P: Serialize> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: PointGeometry,
    pub properties: P,
}

impl<P: Serialize> Feature<P> {
    pub fn point(coordinates: LngLat, properties: P) -> Self {
        Self {
            kind: "Feature",
            geometry: PointGeometry {
                kind: "Point",
                coordinates,
            },
            properties,
        }
    }
}

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection<P: Serialize> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature<P>>,
}

impl<P: Serialize> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }
}

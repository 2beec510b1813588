//! Handlers for the `/pois` resource (map points of interest).
//!
//! Map-facing endpoints answer with bare GeoJSON; search endpoints answer
//! with compact suggestion lists for the geocoder box.

use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use wanderistan_core::error::CoreError;
use wanderistan_core::poi::{
    self, BoundingBox, Feature, FeatureCollection, TypeOption, BOUNDS_LIMIT,
    COMMUNITY_SEARCH_LIMIT, DEFAULT_NEAR_RADIUS_KM, SEARCH_LIMIT, SEGMENT_LIMIT,
};
use wanderistan_core::route::{
    self, RouteSummary, DEFAULT_SAMPLE_POINTS, DEFAULT_SIMPLIFY_TOLERANCE,
};
use wanderistan_core::types::{DbId, LngLat};
use wanderistan_db::models::poi::{CreatePoi, Poi, PoiProperties};
use wanderistan_db::repositories::PoiRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct BoundsParams {
    #[serde(default)]
    pub bounds: Option<String>,
    #[serde(rename = "type", default)]
    pub poi_type: Option<String>,
}

/// Request body for `POST /pois/near-route`.
#[derive(Debug, Deserialize)]
pub struct NearRouteRequest {
    /// Route line as `[longitude, latitude]` pairs.
    pub coordinates: Vec<LngLat>,
    #[serde(rename = "type", default)]
    pub poi_type: Option<String>,
}

/// Verified-POI suggestion for the search box.
#[derive(Debug, Serialize)]
pub struct PoiSuggestion {
    pub id: DbId,
    pub text: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub coordinates: LngLat,
}

impl From<&Poi> for PoiSuggestion {
    fn from(poi: &Poi) -> Self {
        Self {
            id: poi.id,
            text: poi.name.clone(),
            type_name: poi.type_name(),
            coordinates: poi.coordinates(),
        }
    }
}

/// Community search result; includes unverified POIs.
#[derive(Debug, Serialize)]
pub struct CommunitySuggestion {
    #[serde(flatten)]
    pub suggestion: PoiSuggestion,
    pub verified: bool,
    pub price: Option<f64>,
    pub likes_count: i32,
}

/// POIs along a route, plus the route geometry for drawing it.
///
/// Serializes as a GeoJSON `FeatureCollection` with a `route` member.
#[derive(Debug, Serialize)]
pub struct NearRouteCollection {
    #[serde(flatten)]
    pub collection: FeatureCollection<PoiProperties>,
    pub route: RouteSummary,
}

#[derive(Debug, Serialize)]
pub struct PoiLikes {
    pub id: DbId,
    pub likes_count: i32,
}

/// Blank type filters mean "any type".
fn type_filter(poi_type: &Option<String>) -> Option<&str> {
    poi_type.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

fn collection(pois: &[Poi]) -> FeatureCollection<PoiProperties> {
    FeatureCollection::new(pois.iter().map(Poi::to_feature).collect())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/pois?bounds=sw_lng,sw_lat,ne_lng,ne_lat&type=
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<BoundsParams>,
) -> AppResult<Json<FeatureCollection<PoiProperties>>> {
    let bounds = params
        .bounds
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("bounds parameter is required".into()))?;
    let bbox = BoundingBox::parse(bounds)?;

    let pois = PoiRepo::verified_in_bounds(
        &state.pool,
        &bbox,
        type_filter(&params.poi_type),
        BOUNDS_LIMIT,
    )
    .await?;
    Ok(Json(collection(&pois)))
}

/// POST /api/v1/pois
///
/// Community submissions are stored unverified and stay off the map until
/// reviewed.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreatePoi>,
) -> AppResult<(StatusCode, Json<Feature<PoiProperties>>)> {
    input.validate()?;
    let poi = PoiRepo::create(&state.pool, &input, false).await?;
    tracing::info!(
        poi_id = poi.id,
        user_id = auth.user_id,
        poi_type = %poi.poi_type,
        "POI submitted"
    );
    Ok((StatusCode::CREATED, Json(poi.to_feature())))
}

/// GET /api/v1/pois/types
pub async fn types() -> Json<DataResponse<Vec<TypeOption>>> {
    Json(DataResponse {
        data: poi::selectable_types(),
    })
}

/// GET /api/v1/pois/search?query=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<PoiSuggestion>>>> {
    let pois = PoiRepo::search_verified(&state.pool, params.trimmed(), SEARCH_LIMIT).await?;
    Ok(Json(DataResponse {
        data: pois.iter().map(PoiSuggestion::from).collect(),
    }))
}

/// GET /api/v1/pois/community-search?query=
pub async fn community_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<CommunitySuggestion>>>> {
    let pois =
        PoiRepo::community_search(&state.pool, params.trimmed(), COMMUNITY_SEARCH_LIMIT).await?;
    let data = pois
        .iter()
        .map(|poi| CommunitySuggestion {
            suggestion: PoiSuggestion::from(poi),
            verified: poi.verified,
            price: poi.price,
            likes_count: poi.likes_count,
        })
        .collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/pois/near-route
///
/// Verified POIs within [`DEFAULT_NEAR_RADIUS_KM`] of the midpoint of every
/// segment of the submitted line, first occurrence wins.
pub async fn near_route(
    State(state): State<AppState>,
    Json(input): Json<NearRouteRequest>,
) -> AppResult<Json<NearRouteCollection>> {
    if input.coordinates.len() < 2 {
        return Err(CoreError::Validation(
            "coordinates must contain at least two points".into(),
        )
        .into());
    }
    if input
        .coordinates
        .iter()
        .flatten()
        .any(|value| !value.is_finite())
    {
        return Err(CoreError::Validation("coordinates must be finite numbers".into()).into());
    }
    let summary = route::summarize(
        &input.coordinates,
        DEFAULT_SIMPLIFY_TOLERANCE,
        DEFAULT_SAMPLE_POINTS,
    )
    .ok_or_else(|| CoreError::Validation("coordinates must not be empty".into()))?;

    let poi_type = type_filter(&input.poi_type);
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for (latitude, longitude) in poi::segment_midpoints(&input.coordinates) {
        let bbox = BoundingBox::around(latitude, longitude, DEFAULT_NEAR_RADIUS_KM);
        let nearby =
            PoiRepo::verified_in_bounds(&state.pool, &bbox, poi_type, SEGMENT_LIMIT).await?;
        for poi in nearby {
            if seen.insert(poi.id) {
                found.push(poi);
            }
        }
    }

    tracing::debug!(
        segments = input.coordinates.len() - 1,
        route_km = summary.distance_km,
        pois = found.len(),
        "POIs near route"
    );
    Ok(Json(NearRouteCollection {
        collection: collection(&found),
        route: summary,
    }))
}

/// GET /api/v1/pois/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Feature<PoiProperties>>> {
    let poi = PoiRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("POI", id))?;
    Ok(Json(poi.to_feature()))
}

/// POST /api/v1/pois/{id}/like
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PoiLikes>>> {
    let likes_count = PoiRepo::like(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("POI", id))?;
    Ok(Json(DataResponse {
        data: PoiLikes { id, likes_count },
    }))
}

//! Handlers for the `/places` resource and the map configuration.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use wanderistan_core::place::RELATED_PLACES_LIMIT;
use wanderistan_core::types::DbId;
use wanderistan_db::models::place::{Place, PlaceFilter};
use wanderistan_db::models::video::Video;
use wanderistan_db::repositories::{PlaceRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PlaceDetail {
    pub place: Place,
    /// `[latitude, longitude]`.
    pub coordinates: [f64; 2],
    pub map_url: String,
    pub videos: Vec<VideoView>,
    pub related_places: Vec<Place>,
}

/// Stored video with its derived embed link.
#[derive(Debug, Serialize)]
pub struct VideoView {
    pub id: DbId,
    pub title: String,
    pub youtube_url: String,
    pub embed_url: String,
    pub thumbnail_url: String,
}

impl From<Video> for VideoView {
    fn from(video: Video) -> Self {
        Self {
            embed_url: video.embed_url(),
            id: video.id,
            title: video.title,
            youtube_url: video.youtube_url,
            thumbnail_url: video.thumbnail_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaceStats {
    pub video_count: usize,
}

/// One marker of the explore map.
#[derive(Debug, Serialize)]
pub struct MapPlace {
    pub id: DbId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub region: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub videos: Vec<VideoView>,
    pub stats: PlaceStats,
}

/// Where a place description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionSource {
    Generated,
    Stored,
}

#[derive(Debug, Serialize)]
pub struct PlaceDescription {
    pub place_id: DbId,
    pub description: Option<String>,
    pub source: DescriptionSource,
}

#[derive(Debug, Serialize)]
pub struct MapConfig {
    pub available: bool,
    pub access_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn find_place(state: &AppState, id: DbId) -> AppResult<Place> {
    PlaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Place", id))
}

/// GET /api/v1/places
///
/// Optional `?category=`, `?region=` and `?search=` (name or description).
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PlaceFilter>,
) -> AppResult<Json<DataResponse<Vec<Place>>>> {
    let places = PlaceRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: places }))
}

/// GET /api/v1/places/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PlaceDetail>>> {
    let place = find_place(&state, id).await?;
    let videos = VideoRepo::list_for_places(&state.pool, &[place.id]).await?;
    let related_places = PlaceRepo::related(&state.pool, &place, RELATED_PLACES_LIMIT).await?;

    Ok(Json(DataResponse {
        data: PlaceDetail {
            coordinates: place.coordinates(),
            map_url: place.map_url(),
            videos: videos.into_iter().map(VideoView::from).collect(),
            related_places,
            place,
        },
    }))
}

/// GET /api/v1/places/map-data
///
/// Filtered places with their stored videos, shaped for map markers.
pub async fn map_data(
    State(state): State<AppState>,
    Query(filter): Query<PlaceFilter>,
) -> AppResult<Json<DataResponse<Vec<MapPlace>>>> {
    let places = PlaceRepo::list(&state.pool, &filter).await?;
    let ids: Vec<DbId> = places.iter().map(|p| p.id).collect();

    let mut videos_by_place: HashMap<DbId, Vec<VideoView>> = HashMap::new();
    for video in VideoRepo::list_for_places(&state.pool, &ids).await? {
        videos_by_place
            .entry(video.place_id)
            .or_default()
            .push(VideoView::from(video));
    }

    let markers = places
        .into_iter()
        .map(|place| {
            let videos = videos_by_place.remove(&place.id).unwrap_or_default();
            MapPlace {
                id: place.id,
                name: place.name,
                latitude: place.latitude,
                longitude: place.longitude,
                category: place.category,
                region: place.region,
                description: place.description,
                image_url: place.cover_image_url,
                stats: PlaceStats {
                    video_count: videos.len(),
                },
                videos,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: markers }))
}

/// GET /api/v1/places/{id}/description
///
/// Generated description, or the stored one when generation is unavailable.
pub async fn description(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PlaceDescription>>> {
    let place = find_place(&state, id).await?;

    let data = match state
        .chat
        .generate_place_description(&place.name, &place.region)
        .await
    {
        Some(text) => PlaceDescription {
            place_id: place.id,
            description: Some(text.trim().to_string()),
            source: DescriptionSource::Generated,
        },
        None => PlaceDescription {
            place_id: place.id,
            description: place.description,
            source: DescriptionSource::Stored,
        },
    };
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/map/config
pub async fn map_config(State(state): State<AppState>) -> Json<DataResponse<MapConfig>> {
    let access_token = state.config.mapbox_api_key.clone();
    Json(DataResponse {
        data: MapConfig {
            available: access_token.is_some(),
            access_token,
        },
    })
}

//! Handlers for stored videos and live YouTube lookups.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use wanderistan_db::models::video::{CreateVideo, Video};
use wanderistan_db::repositories::{PlaceRepo, VideoRepo};
use wanderistan_integrations::youtube::{
    COUNTRY_MAX_RESULTS, LOCATION_MAX_RESULTS, SEARCH_MAX_RESULTS,
};
use wanderistan_integrations::{FeaturedKind, VideoDetails, VideoResult};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Videos returned for a single place page.
const PLACE_PAGE_VIDEOS: usize = 4;

/// A list of live videos for one lookup key.
#[derive(Debug, Serialize)]
pub struct VideoList {
    pub location: String,
    pub videos: Vec<VideoResult>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl VideoList {
    fn new(location: String, videos: Vec<VideoResult>) -> Self {
        Self {
            location,
            count: videos.len(),
            videos,
            search_query: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewParams {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VideoPreview {
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub video: Option<VideoResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchLimitParams {
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// GET /api/v1/videos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Video>>>> {
    let videos = VideoRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: videos }))
}

/// POST /api/v1/videos
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateVideo>,
) -> AppResult<(StatusCode, Json<DataResponse<Video>>)> {
    input.validate()?;
    if PlaceRepo::find_by_id(&state.pool, input.place_id).await?.is_none() {
        return Err(AppError::not_found("Place", input.place_id));
    }
    let video = VideoRepo::create(&state.pool, &input).await?;
    tracing::info!(
        video_id = video.id,
        place_id = video.place_id,
        user_id = auth.user_id,
        "Video added"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// GET /api/v1/videos/country/{country}
pub async fn by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Json<DataResponse<VideoList>> {
    let videos = state
        .videos
        .videos_for_country(&country, COUNTRY_MAX_RESULTS)
        .await;
    Json(DataResponse {
        data: VideoList::new(country, videos),
    })
}

/// GET /api/v1/videos/place/{place}
pub async fn by_place(
    State(state): State<AppState>,
    Path(place): Path<String>,
) -> Json<DataResponse<VideoList>> {
    let videos = state.videos.videos_for_place(&place, PLACE_PAGE_VIDEOS).await;
    Json(DataResponse {
        data: VideoList::new(place, videos),
    })
}

/// GET /api/v1/videos/preview/{location}
///
/// `?type=place|country`; anything else runs a free-text search.
pub async fn preview(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(params): Query<PreviewParams>,
) -> Json<DataResponse<VideoPreview>> {
    let kind = params.kind.unwrap_or_else(|| "place".to_string());
    let video = state
        .videos
        .featured_video(&location, FeaturedKind::parse(&kind))
        .await;
    Json(DataResponse {
        data: VideoPreview {
            location,
            kind,
            video,
        },
    })
}

/// GET /api/v1/videos/search/{location}
///
/// `?max_results=` is clamped to `1..=10`, default 3.
pub async fn search(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(params): Query<SearchLimitParams>,
) -> Json<DataResponse<VideoList>> {
    let max_results = params
        .max_results
        .unwrap_or(LOCATION_MAX_RESULTS)
        .clamp(1, SEARCH_MAX_RESULTS);
    let videos = state
        .videos
        .search_for_location(&location, max_results)
        .await;

    let mut list = VideoList::new(location, videos);
    list.search_query = Some(format!("{} travel guide", list.location));
    Json(DataResponse { data: list })
}

/// GET /api/v1/videos/details/{video_id}
pub async fn details(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Json<DataResponse<VideoDetails>>> {
    let details = state
        .videos
        .video_details(&video_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No details for video {video_id}")))?;
    Ok(Json(DataResponse { data: details }))
}

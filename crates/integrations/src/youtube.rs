//! YouTube Data API v3 client for travel video search.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wanderistan_core::video::{embed_url, watch_url};

use crate::config::IntegrationsConfig;
use crate::error::IntegrationError;
use crate::fallback;

pub const PLACE_MAX_RESULTS: usize = 3;
pub const TRIP_MAX_RESULTS: usize = 5;
pub const COUNTRY_MAX_RESULTS: usize = 6;
pub const SEARCH_MAX_RESULTS: usize = 10;
pub const LOCATION_MAX_RESULTS: usize = 3;

/// YouTube's "Travel & Events" category.
const TRAVEL_CATEGORY_ID: &str = "27";

/// One video as shown to clients, whether live or from the fallback tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoResult {
    pub video_id: String,
    pub title: String,
    pub youtube_url: String,
    pub embed_url: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: String,
    pub description: String,
    pub location_name: String,
}

/// Duration and engagement counts of a single video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDetails {
    /// ISO-8601 duration, e.g. `PT10M30S`.
    pub duration: Option<String>,
    pub view_count: Option<String>,
    pub like_count: Option<String>,
}

/// Which search backs a featured-video preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedKind {
    Place,
    Country,
    Search,
}

impl FeaturedKind {
    /// `"place"` and `"country"` map to their searches; anything else is a
    /// free-text search.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "place" => Self::Place,
            "country" => Self::Country,
            _ => Self::Search,
        }
    }
}

/// Video lookups used by the API. Implementations never fail; they fall
/// back to static data or return nothing.
#[async_trait]
pub trait VideoService: Send + Sync {
    async fn videos_for_place(&self, place_name: &str, max_results: usize) -> Vec<VideoResult>;

    async fn videos_for_trip(&self, destination: &str, max_results: usize) -> Vec<VideoResult>;

    async fn videos_for_country(&self, country: &str, max_results: usize) -> Vec<VideoResult>;

    async fn search(&self, query: &str, max_results: usize) -> Vec<VideoResult>;

    async fn video_details(&self, video_id: &str) -> Option<VideoDetails>;

    async fn search_for_location(&self, location: &str, max_results: usize) -> Vec<VideoResult>;

    /// First video of the search selected by `kind`.
    async fn featured_video(&self, location: &str, kind: FeaturedKind) -> Option<VideoResult> {
        let videos = match kind {
            FeaturedKind::Place => self.videos_for_place(location, 1).await,
            FeaturedKind::Country => self.videos_for_country(location, 1).await,
            FeaturedKind::Search => self.search(&format!("{location} travel"), 1).await,
        };
        videos.into_iter().next()
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Snippet {
    title: String,
    description: String,
    channel_title: String,
    published_at: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    #[serde(default)]
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
}

fn to_results(response: SearchResponse, location_name: &str) -> Vec<VideoResult> {
    response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            let snippet = item.snippet;
            let thumbnails = snippet.thumbnails;
            let thumbnail_url = thumbnails
                .high
                .or(thumbnails.medium)
                .or(thumbnails.default)
                .map(|t| t.url)
                .unwrap_or_default();
            Some(VideoResult {
                youtube_url: watch_url(&video_id),
                embed_url: embed_url(&video_id),
                video_id,
                title: snippet.title,
                thumbnail_url,
                channel_title: snippet.channel_title,
                published_at: snippet.published_at,
                description: snippet.description,
                location_name: location_name.to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Extra query parameters for one search.
struct SearchOptions {
    category_id: Option<&'static str>,
    high_definition: bool,
}

impl SearchOptions {
    const PLAIN: Self = Self {
        category_id: None,
        high_definition: false,
    };
}

/// HTTP client for the YouTube Data API.
pub struct YoutubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl YoutubeClient {
    pub fn new(client: reqwest::Client, config: &IntegrationsConfig) -> Self {
        Self {
            client,
            base_url: config.youtube_base_url.trim_end_matches('/').to_string(),
            api_key: config.youtube_api_key.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, IntegrationError> {
        self.api_key
            .as_deref()
            .ok_or(IntegrationError::NotConfigured("YouTube API key"))
    }

    async fn search_raw(
        &self,
        query: &str,
        max_results: usize,
        options: SearchOptions,
        location_name: &str,
    ) -> Result<Vec<VideoResult>, IntegrationError> {
        let api_key = self.api_key()?;
        let max_results = max_results.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", max_results.as_str()),
            ("key", api_key),
            ("videoDuration", "medium"),
            ("relevanceLanguage", "en"),
            ("order", "relevance"),
        ];
        if let Some(category_id) = options.category_id {
            params.push(("videoCategoryId", category_id));
        }
        if options.high_definition {
            params.push(("videoDefinition", "high"));
        }

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&params)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let body: SearchResponse = response.json().await?;
        Ok(to_results(body, location_name))
    }

    async fn details_raw(&self, video_id: &str) -> Result<Option<VideoDetails>, IntegrationError> {
        let api_key = self.api_key()?;
        let response = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "contentDetails,statistics"),
                ("id", video_id),
                ("key", api_key),
            ])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let body: VideosResponse = response.json().await?;
        Ok(body.items.into_iter().next().map(|item| VideoDetails {
            duration: item.content_details.duration,
            view_count: item.statistics.view_count,
            like_count: item.statistics.like_count,
        }))
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, IntegrationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(IntegrationError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

fn log_failure(operation: &str, subject: &str, err: &IntegrationError) {
    tracing::warn!(operation, subject, error = %err, "YouTube request failed");
}

#[async_trait]
impl VideoService for YoutubeClient {
    async fn videos_for_place(&self, place_name: &str, max_results: usize) -> Vec<VideoResult> {
        if !self.is_configured() {
            return Vec::new();
        }
        let query = format!("{place_name} travel guide");
        match self
            .search_raw(&query, max_results, SearchOptions::PLAIN, place_name)
            .await
        {
            Ok(videos) => videos,
            Err(err) => {
                log_failure("videos_for_place", place_name, &err);
                fallback::place_videos(place_name, max_results)
            }
        }
    }

    async fn videos_for_trip(&self, destination: &str, max_results: usize) -> Vec<VideoResult> {
        if !self.is_configured() {
            return Vec::new();
        }
        let query = format!("{destination} travel guide itinerary");
        self.search_raw(&query, max_results, SearchOptions::PLAIN, destination)
            .await
            .unwrap_or_else(|err| {
                log_failure("videos_for_trip", destination, &err);
                Vec::new()
            })
    }

    async fn videos_for_country(&self, country: &str, max_results: usize) -> Vec<VideoResult> {
        if !self.is_configured() {
            return Vec::new();
        }
        let query = format!("{country} travel guide tourism");
        let options = SearchOptions {
            category_id: Some(TRAVEL_CATEGORY_ID),
            high_definition: false,
        };
        match self.search_raw(&query, max_results, options, country).await {
            Ok(videos) => videos,
            Err(err) => {
                log_failure("videos_for_country", country, &err);
                fallback::country_videos(country, max_results)
            }
        }
    }

    async fn search(&self, query: &str, max_results: usize) -> Vec<VideoResult> {
        if !self.is_configured() {
            return Vec::new();
        }
        self.search_raw(query, max_results, SearchOptions::PLAIN, query)
            .await
            .unwrap_or_else(|err| {
                log_failure("search", query, &err);
                Vec::new()
            })
    }

    async fn video_details(&self, video_id: &str) -> Option<VideoDetails> {
        if !self.is_configured() {
            return None;
        }
        self.details_raw(video_id).await.unwrap_or_else(|err| {
            log_failure("video_details", video_id, &err);
            None
        })
    }

    async fn search_for_location(&self, location: &str, max_results: usize) -> Vec<VideoResult> {
        if !self.is_configured() {
            return Vec::new();
        }
        let query = format!("{location} travel guide");
        let options = SearchOptions {
            category_id: None,
            high_definition: true,
        };
        match self.search_raw(&query, max_results, options, location).await {
            Ok(videos) => videos,
            Err(err) => {
                log_failure("search_for_location", location, &err);
                fallback::location_videos(location, max_results)
            }
        }
    }
}

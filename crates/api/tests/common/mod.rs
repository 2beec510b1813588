#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use wanderistan_api::auth::jwt::JwtConfig;
use wanderistan_api::config::ServerConfig;
use wanderistan_api::router::build_app_router;
use wanderistan_api::state::AppState;
use wanderistan_core::video::{embed_url, thumbnail_url, watch_url};
use wanderistan_integrations::{
    ChatService, GeneratedItinerary, IntegrationsConfig, ItineraryDay, VideoDetails,
    VideoResult, VideoService,
};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and no third-party keys.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-for-api-tests".to_string(),
            access_token_expiry_mins: 60,
        },
        integrations: IntegrationsConfig::default(),
        mapbox_api_key: None,
    }
}

// ---------------------------------------------------------------------------
// Integration stubs
// ---------------------------------------------------------------------------

/// Canned AI answers. `None` fields behave like an unavailable service.
#[derive(Default)]
pub struct StubChat {
    pub itinerary: Option<GeneratedItinerary>,
    pub reply: Option<String>,
    pub description: Option<String>,
}

impl StubChat {
    /// A chat service that answers everything.
    pub fn answering() -> Self {
        Self {
            itinerary: Some(sample_itinerary()),
            reply: Some("Zanzibar is lovely in July.".to_string()),
            description: Some("  A pink city of palaces and bazaars.  ".to_string()),
        }
    }
}

#[async_trait]
impl ChatService for StubChat {
    async fn generate_trip_itinerary(&self, _prompt: &str) -> Option<GeneratedItinerary> {
        self.itinerary.clone()
    }

    async fn generate_travel_response(&self, _message: &str) -> Option<String> {
        self.reply.clone()
    }

    async fn generate_place_description(&self, _name: &str, _region: &str) -> Option<String> {
        self.description.clone()
    }
}

/// Three-day Goa plan with a stored breakdown and one unusable day.
pub fn sample_itinerary() -> GeneratedItinerary {
    let day = |n: i32, title: &str, activities: &[&str]| ItineraryDay {
        day: n,
        title: title.to_string(),
        activities: activities.iter().map(|a| a.to_string()).collect(),
        ..Default::default()
    };
    GeneratedItinerary {
        title: "Goa Beach Escape".to_string(),
        summary: "Three lazy days on the coast.".to_string(),
        itinerary: vec![
            day(1, "Arrive in Panaji", &["Check in", "Riverside walk"]),
            day(2, "Beaches", &["Baga", "Calangute"]),
            day(3, "", &[]),
        ],
        budget_estimate: Some("₹30,000".to_string()),
        budget_breakdown: Some(json!({"flights": "₹8,750", "accommodation": 12000})),
        money_saving_tips: vec!["Rent a scooter".to_string()],
    }
}

/// Video lookups answered from the query text, so tests can see which
/// search ran and with what limit.
pub struct StubVideos {
    pub available: bool,
}

pub fn stub_video(label: &str, n: usize) -> VideoResult {
    let video_id = format!("stub{n:07}");
    VideoResult {
        title: format!("{label} #{n}"),
        youtube_url: watch_url(&video_id),
        embed_url: embed_url(&video_id),
        thumbnail_url: thumbnail_url(&video_id),
        channel_title: "Stub Channel".to_string(),
        published_at: "2024-01-01T00:00:00Z".to_string(),
        description: String::new(),
        location_name: label.to_string(),
        video_id,
    }
}

impl StubVideos {
    fn results(&self, label: String, max_results: usize) -> Vec<VideoResult> {
        if !self.available {
            return Vec::new();
        }
        (1..=max_results).map(|n| stub_video(&label, n)).collect()
    }
}

#[async_trait]
impl VideoService for StubVideos {
    async fn videos_for_place(&self, place_name: &str, max_results: usize) -> Vec<VideoResult> {
        self.results(format!("place {place_name}"), max_results)
    }

    async fn videos_for_trip(&self, destination: &str, max_results: usize) -> Vec<VideoResult> {
        self.results(format!("trip {destination}"), max_results)
    }

    async fn videos_for_country(&self, country: &str, max_results: usize) -> Vec<VideoResult> {
        self.results(format!("country {country}"), max_results)
    }

    async fn search(&self, query: &str, max_results: usize) -> Vec<VideoResult> {
        self.results(format!("search {query}"), max_results)
    }

    async fn video_details(&self, video_id: &str) -> Option<VideoDetails> {
        (self.available && video_id.starts_with("stub")).then(|| VideoDetails {
            duration: Some("PT10M30S".to_string()),
            view_count: Some("1500".to_string()),
            like_count: Some("42".to_string()),
        })
    }

    async fn search_for_location(&self, location: &str, max_results: usize) -> Vec<VideoResult> {
        self.results(format!("location {location}"), max_results)
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with answering stub integrations.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubChat::answering(), StubVideos { available: true })
}

/// Build the application with integrations that produce nothing.
pub fn build_degraded_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubChat::default(), StubVideos { available: false })
}

pub fn build_test_app_with(pool: PgPool, chat: StubChat, videos: StubVideos) -> Router {
    build_app_with_config(pool, test_config(), chat, videos)
}

pub fn build_app_with_config(
    pool: PgPool,
    config: ServerConfig,
    chat: StubChat,
    videos: StubVideos,
) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
        chat: Arc::new(chat),
        videos: Arc::new(videos),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API and return their access token.
pub async fn register(app: Router, email: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({ "email": email, "password": "secret123" }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

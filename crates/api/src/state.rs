use std::sync::Arc;

use wanderistan_integrations::{ChatService, OpenAiClient, VideoService, YoutubeClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wanderistan_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// AI text generation (itineraries, chat, place descriptions).
    pub chat: Arc<dyn ChatService>,
    /// Travel video lookups.
    pub videos: Arc<dyn VideoService>,
}

impl AppState {
    /// Build state with the real OpenAI and YouTube clients sharing one
    /// HTTP client.
    pub fn new(
        pool: wanderistan_db::DbPool,
        config: ServerConfig,
    ) -> Result<Self, reqwest::Error> {
        let http = config.integrations.http_client()?;
        let chat = Arc::new(OpenAiClient::new(http.clone(), &config.integrations));
        let videos = Arc::new(YoutubeClient::new(http, &config.integrations));
        Ok(Self {
            pool,
            config: Arc::new(config),
            chat,
            videos,
        })
    }
}

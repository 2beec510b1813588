//! Clients for the third-party services Wanderistan leans on: OpenAI chat
//! completions for itineraries and descriptions, and the YouTube Data API
//! for travel videos.
//!
//! Every public client method returns plain data. Failures are logged and
//! replaced with static fallback content or an empty result, so callers
//! never see an [`IntegrationError`].

pub mod config;
pub mod error;
pub mod fallback;
pub mod openai;
pub mod youtube;

pub use config::IntegrationsConfig;
pub use error::IntegrationError;
pub use openai::{ChatService, GeneratedItinerary, ItineraryDay, OpenAiClient};
pub use youtube::{FeaturedKind, VideoDetails, VideoResult, VideoService, YoutubeClient};

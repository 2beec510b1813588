//! YouTube URL rules shared by stored videos and search results.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::validation::FieldErrors;

/// A canonical YouTube watch URL.
const WATCH_URL_PATTERN: &str = r"^https://www\.youtube\.com/watch\?v=[\w-]+$";

static WATCH_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WATCH_URL_PATTERN).expect("valid regex"));

/// Whether `url` is a canonical YouTube watch URL.
pub fn is_watch_url(url: &str) -> bool {
    WATCH_URL_RE.is_match(url)
}

/// Validate the writable fields of a stored video.
pub fn validate_video(youtube_url: &str, title: &str, thumbnail_url: &str) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    if !is_watch_url(youtube_url) {
        errors.add("youtube_url must be a valid YouTube URL");
    }
    errors.require_present("title", title);
    errors.require_present("thumbnail_url", thumbnail_url);
    errors.finish()
}

/// The id following the last `v=` in a watch URL.
pub fn video_id(youtube_url: &str) -> &str {
    youtube_url.rsplit("v=").next().unwrap_or(youtube_url)
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

/// High-quality thumbnail for a video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg")
}

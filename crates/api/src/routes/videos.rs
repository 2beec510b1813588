//! Route definitions for the `/videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET  /                        -> list
/// POST /                        -> create (requires auth)
/// GET  /country/{country}       -> by_country
/// GET  /place/{place}           -> by_place
/// GET  /preview/{location}      -> preview
/// GET  /search/{location}       -> search
/// GET  /details/{video_id}      -> details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list).post(videos::create))
        .route("/country/{country}", get(videos::by_country))
        .route("/place/{place}", get(videos::by_place))
        .route("/preview/{location}", get(videos::preview))
        .route("/search/{location}", get(videos::search))
        .route("/details/{video_id}", get(videos::details))
}

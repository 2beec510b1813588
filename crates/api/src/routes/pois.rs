//! Route definitions for the `/pois` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pois;
use crate::state::AppState;

/// Routes mounted at `/pois`.
///
/// ```text
/// GET  /                   -> index (?bounds=&type=)
/// POST /                   -> create (requires auth)
/// GET  /types              -> types
/// GET  /search             -> search
/// GET  /community-search   -> community_search
/// POST /near-route         -> near_route
/// GET  /{id}               -> get_by_id
/// POST /{id}/like          -> like
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pois::index).post(pois::create))
        .route("/types", get(pois::types))
        .route("/search", get(pois::search))
        .route("/community-search", get(pois::community_search))
        .route("/near-route", post(pois::near_route))
        .route("/{id}", get(pois::get_by_id))
        .route("/{id}/like", post(pois::like))
}

//! Route definitions for the `/places` resource and map settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::places;
use crate::state::AppState;

/// Routes mounted at `/places`.
///
/// ```text
/// GET /                   -> list
/// GET /map-data           -> map_data
/// GET /{id}               -> get_by_id
/// GET /{id}/description   -> description
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(places::list))
        .route("/map-data", get(places::map_data))
        .route("/{id}", get(places::get_by_id))
        .route("/{id}/description", get(places::description))
}

/// Routes mounted at `/map`.
///
/// ```text
/// GET /config -> map_config
/// ```
pub fn map_router() -> Router<AppState> {
    Router::new().route("/config", get(places::map_config))
}

pub mod auth;
pub mod health;
pub mod places;
pub mod planner;
pub mod pois;
pub mod trips;
pub mod videos;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user (requires auth)
///
/// /home                                            landing page data (auth optional)
///
/// /trips                                           list, create (requires auth)
/// /trips/{id}                                      get, update, delete
/// /trips/{id}/places                               add place (POST)
/// /trips/{id}/places/{place_id}                    remove place (DELETE)
/// /trips/{id}/budget                               budget breakdown (GET)
///
/// /planner                                         generate AI trip (POST, requires auth)
/// /planner/test                                    AI connectivity check (POST)
/// /budget/estimate                                 heuristic breakdown (POST)
///
/// /places                                          list with filters
/// /places/map-data                                 map markers with videos
/// /places/{id}                                     detail with videos, related places
/// /places/{id}/description                         AI description, stored fallback
/// /map/config                                      map token availability
///
/// /videos                                          list, create (create requires auth)
/// /videos/country/{country}                        YouTube country videos
/// /videos/place/{place}                            YouTube place videos
/// /videos/preview/{location}                       single featured video
/// /videos/search/{location}                        location search with fallback
/// /videos/details/{video_id}                       duration and counts
///
/// /pois                                            GeoJSON in bounds, create (create requires auth)
/// /pois/types                                      selectable types
/// /pois/search                                     verified name search
/// /pois/community-search                           all POIs, verified first
/// /pois/near-route                                 GeoJSON near a route line (POST)
/// /pois/{id}                                       GeoJSON feature
/// /pois/{id}/like                                  add a like (POST)
///
/// /chat                                            travel assistant (POST, requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration, login, current user.
        .nest("/auth", auth::router())
        // Landing page.
        .route("/home", get(handlers::home::index))
        // Trip CRUD, trip places, budget view.
        .nest("/trips", trips::router())
        // AI planner and budget estimator.
        .nest("/planner", planner::router())
        .nest("/budget", planner::budget_router())
        // Curated places and map settings.
        .nest("/places", places::router())
        .nest("/map", places::map_router())
        // Stored videos and YouTube lookups.
        .nest("/videos", videos::router())
        // Points of interest.
        .nest("/pois", pois::router())
        // Travel chat.
        .route("/chat", post(handlers::chat::send))
}

//! Route definitions for the `/trips` resource.
//!
//! Every route requires auth; trips are only visible to their owner.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::trips;
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
/// POST   /{id}/places              -> add_place
/// DELETE /{id}/places/{place_id}   -> remove_place
/// GET    /{id}/budget              -> budget
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trips::list).post(trips::create))
        .route(
            "/{id}",
            get(trips::get_by_id)
                .put(trips::update)
                .delete(trips::delete),
        )
        .route("/{id}/places", post(trips::add_place))
        .route("/{id}/places/{place_id}", delete(trips::remove_place))
        .route("/{id}/budget", get(trips::budget))
}

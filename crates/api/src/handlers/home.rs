//! Handler for the landing page payload.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use wanderistan_core::place::{CATEGORIES, FEATURED_PLACES_LIMIT, REGIONS};
use wanderistan_db::models::place::Place;
use wanderistan_db::models::trip::Trip;
use wanderistan_db::repositories::{PlaceRepo, TripRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of recent trips shown to a signed-in user.
const RECENT_TRIPS_LIMIT: i64 = 3;

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub featured_places: Vec<Place>,
    /// Empty for anonymous visitors.
    pub recent_trips: Vec<Trip>,
    pub categories: &'static [&'static str],
    pub regions: &'static [&'static str],
}

/// GET /api/v1/home
pub async fn index(
    State(state): State<AppState>,
    user: Option<AuthUser>,
) -> AppResult<Json<DataResponse<HomePage>>> {
    let featured_places = PlaceRepo::featured(&state.pool, FEATURED_PLACES_LIMIT).await?;
    let recent_trips = match user {
        Some(user) => {
            TripRepo::list_recent_for_user(&state.pool, user.user_id, RECENT_TRIPS_LIMIT).await?
        }
        None => Vec::new(),
    };

    Ok(Json(DataResponse {
        data: HomePage {
            featured_places,
            recent_trips,
            categories: CATEGORIES,
            regions: REGIONS,
        },
    }))
}

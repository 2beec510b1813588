//! Handlers for the `/trips` resource and its itinerary.
//!
//! Every trip lookup is scoped to the authenticated user; another user's
//! trip is reported as not found.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use wanderistan_core::budget::{self, category_info, CategoryInfo, DestinationTier};
use wanderistan_core::itinerary::{day_label, next_day, validate_item, visit_title};
use wanderistan_core::trip::{duration_label, TripStatus};
use wanderistan_core::types::DbId;
use wanderistan_db::models::itinerary_item::{CreateItineraryItem, ItineraryItem};
use wanderistan_db::models::place::Place;
use wanderistan_db::models::trip::{CreateTrip, Trip, UpdateTrip};
use wanderistan_db::repositories::{ItineraryItemRepo, PlaceRepo, TripRepo};
use wanderistan_integrations::youtube::TRIP_MAX_RESULTS;
use wanderistan_integrations::VideoResult;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A trip with its date-derived fields.
#[derive(Debug, Serialize)]
pub struct TripSummary {
    #[serde(flatten)]
    pub trip: Trip,
    pub status: TripStatus,
    pub status_label: &'static str,
    pub duration_days: i64,
    pub duration_label: String,
}

impl TripSummary {
    pub fn new(trip: Trip, today: NaiveDate) -> Self {
        let status = trip.status(today);
        let duration_days = trip.duration_days();
        Self {
            trip,
            status,
            status_label: status.label(),
            duration_days,
            duration_label: duration_label(duration_days),
        }
    }
}

/// One category of a budget breakdown with its display metadata.
#[derive(Debug, Serialize)]
pub struct BudgetLine {
    #[serde(flatten)]
    pub info: CategoryInfo,
    pub amount: i64,
    /// Share of the trip budget, truncated to a whole percent.
    pub percent_of_budget: i64,
}

/// Where a breakdown came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownSource {
    /// Saved with the trip, usually from the itinerary generator.
    Stored,
    /// Computed from the destination tier.
    Estimated,
}

#[derive(Debug, Serialize)]
pub struct BudgetView {
    pub budget: i64,
    pub tier: DestinationTier,
    pub source: BreakdownSource,
    pub breakdown: Vec<BudgetLine>,
    pub total_cost: i64,
    pub savings: i64,
    pub budget_estimate: Option<String>,
    pub money_saving_tips: Vec<String>,
}

impl BudgetView {
    pub fn for_trip(trip: &Trip) -> Self {
        let stored = trip.breakdown_amounts();
        let tier = DestinationTier::classify(Some(&trip.destination));
        let (source, amounts) = if stored.is_empty() {
            (
                BreakdownSource::Estimated,
                budget::allocate_for_tier(trip.budget, tier).to_map(),
            )
        } else {
            (BreakdownSource::Stored, stored)
        };

        let breakdown = amounts
            .into_iter()
            .map(|(key, amount)| BudgetLine {
                info: category_info(&key),
                amount,
                percent_of_budget: budget::share_of_budget(amount, trip.budget),
            })
            .collect();

        Self {
            budget: trip.budget,
            tier,
            source,
            breakdown,
            total_cost: trip.total_cost(),
            savings: trip.savings(),
            budget_estimate: trip.budget_estimate.clone(),
            money_saving_tips: trip.tips(),
        }
    }
}

/// Items scheduled on one day.
#[derive(Debug, Serialize)]
pub struct ItineraryDayView {
    pub day: i32,
    pub label: String,
    pub items: Vec<ItineraryItem>,
}

/// Group items that are already ordered by day.
fn group_by_day(items: Vec<ItineraryItem>) -> Vec<ItineraryDayView> {
    let mut days: Vec<ItineraryDayView> = Vec::new();
    for item in items {
        match days.last_mut() {
            Some(current) if current.day == item.day => current.items.push(item),
            _ => days.push(ItineraryDayView {
                day: item.day,
                label: day_label(item.day),
                items: vec![item],
            }),
        }
    }
    days
}

#[derive(Debug, Serialize)]
pub struct TripDetail {
    pub trip: TripSummary,
    pub itinerary: Vec<ItineraryDayView>,
    pub places: Vec<Place>,
    pub budget: BudgetView,
    pub videos: Vec<VideoResult>,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<TripStatus>,
}

/// Request body for `POST /trips/{id}/places`.
#[derive(Debug, Deserialize)]
pub struct AddPlaceRequest {
    pub place_id: DbId,
    /// Defaults to the day after the last scheduled one.
    pub day: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct RemovedPlace {
    pub place_id: DbId,
    pub removed_items: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

async fn find_trip(state: &AppState, id: DbId, user_id: DbId) -> AppResult<Trip> {
    TripRepo::find_for_user(&state.pool, id, user_id)
        .await?
        .ok_or(AppError::not_found("Trip", id))
}

/// GET /api/v1/trips
///
/// The user's trips, newest first, optionally narrowed by `?status=`.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<TripSummary>>>> {
    let today = today();
    let trips = TripRepo::list_for_user(&state.pool, auth.user_id, params.status, today).await?;
    Ok(Json(DataResponse {
        data: trips
            .into_iter()
            .map(|trip| TripSummary::new(trip, today))
            .collect(),
    }))
}

/// POST /api/v1/trips
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateTrip>,
) -> AppResult<(StatusCode, Json<DataResponse<TripSummary>>)> {
    input.validate()?;
    let trip = TripRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(trip_id = trip.id, user_id = auth.user_id, "Trip created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TripSummary::new(trip, today()),
        }),
    ))
}

/// GET /api/v1/trips/{id}
///
/// Trip with its itinerary by day, budget view, and travel videos. Videos
/// come from the itinerary's places, one each, or from the destination when
/// none of the places has any.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TripDetail>>> {
    let trip = find_trip(&state, id, auth.user_id).await?;
    let items = ItineraryItemRepo::list_for_trip(&state.pool, trip.id).await?;
    let places = PlaceRepo::list_for_trip(&state.pool, trip.id).await?;

    let lookups = places
        .iter()
        .map(|place| state.videos.videos_for_place(&place.name, 1));
    let mut videos: Vec<VideoResult> = join_all(lookups).await.into_iter().flatten().collect();
    if videos.is_empty() {
        videos = state
            .videos
            .videos_for_trip(&trip.destination, TRIP_MAX_RESULTS)
            .await;
    }

    let budget = BudgetView::for_trip(&trip);
    Ok(Json(DataResponse {
        data: TripDetail {
            trip: TripSummary::new(trip, today()),
            itinerary: group_by_day(items),
            places,
            budget,
            videos,
        },
    }))
}

/// PUT /api/v1/trips/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrip>,
) -> AppResult<Json<DataResponse<TripSummary>>> {
    input.validate()?;
    let trip = TripRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::not_found("Trip", id))?;
    Ok(Json(DataResponse {
        data: TripSummary::new(trip, today()),
    }))
}

/// DELETE /api/v1/trips/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TripRepo::delete(&state.pool, id, auth.user_id).await? {
        tracing::info!(trip_id = id, user_id = auth.user_id, "Trip deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Trip", id))
    }
}

/// POST /api/v1/trips/{id}/places
pub async fn add_place(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AddPlaceRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ItineraryItem>>)> {
    let trip = find_trip(&state, id, auth.user_id).await?;
    let place = PlaceRepo::find_by_id(&state.pool, input.place_id)
        .await?
        .ok_or(AppError::not_found("Place", input.place_id))?;

    let day = match input.day {
        Some(day) => day,
        None => next_day(ItineraryItemRepo::max_day(&state.pool, trip.id).await?),
    };
    let title = visit_title(&place.name);
    validate_item(day, &title)?;

    let item = ItineraryItemRepo::create(
        &state.pool,
        &CreateItineraryItem {
            trip_id: trip.id,
            place_id: Some(place.id),
            day,
            title,
            description: place.description.clone(),
        },
    )
    .await?;
    tracing::info!(trip_id = trip.id, place_id = place.id, day, "Place added to trip");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// DELETE /api/v1/trips/{id}/places/{place_id}
///
/// Removes every itinerary item of the trip that visits the place.
pub async fn remove_place(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, place_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<RemovedPlace>>> {
    let trip = find_trip(&state, id, auth.user_id).await?;
    PlaceRepo::find_by_id(&state.pool, place_id)
        .await?
        .ok_or(AppError::not_found("Place", place_id))?;

    let removed_items = ItineraryItemRepo::delete_for_place(&state.pool, trip.id, place_id).await?;
    Ok(Json(DataResponse {
        data: RemovedPlace {
            place_id,
            removed_items,
        },
    }))
}

/// GET /api/v1/trips/{id}/budget
pub async fn budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BudgetView>>> {
    let trip = find_trip(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: BudgetView::for_trip(&trip),
    }))
}

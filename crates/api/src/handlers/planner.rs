//! Handlers for the AI trip planner.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use wanderistan_core::budget;
use wanderistan_core::itinerary::validate_item;
use wanderistan_core::planner::{build_structured_prompt, PlannerRequest};
use wanderistan_db::models::itinerary_item::{CreateItineraryItem, ItineraryItem};
use wanderistan_db::models::trip::CreateTrip;
use wanderistan_db::repositories::{ItineraryItemRepo, TripRepo};
use wanderistan_integrations::{GeneratedItinerary, ItineraryDay};

use crate::error::{AppError, AppResult};
use crate::handlers::trips::TripSummary;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_TRIP_TITLE: &str = "AI Generated Trip";
const DEFAULT_TEST_PROMPT: &str = "Hi";

#[derive(Debug, Serialize)]
pub struct PlannedTrip {
    pub trip: TripSummary,
    pub itinerary_items: Vec<ItineraryItem>,
}

/// Request body for `POST /planner/test`.
#[derive(Debug, Default, Deserialize)]
pub struct TestPromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Columns of the trip created from a generated plan.
fn trip_from_plan(
    request: &PlannerRequest,
    plan: &GeneratedItinerary,
    today: chrono::NaiveDate,
) -> Result<CreateTrip, serde_json::Error> {
    let budget = request.effective_budget();

    let mut breakdown = plan
        .budget_breakdown
        .as_ref()
        .map(budget::normalize_breakdown)
        .unwrap_or_default();
    if breakdown.is_empty() {
        breakdown = budget::allocate(budget, Some(&request.destination)).to_map();
    }

    let title = match plan.title.trim() {
        "" => DEFAULT_TRIP_TITLE.to_string(),
        title => title.to_string(),
    };
    let (start_date, end_date) = request.trip_dates(today);

    Ok(CreateTrip {
        title,
        destination: request.destination.trim().to_string(),
        start_date,
        end_date,
        budget,
        ai_summary: Some(plan.summary.clone()).filter(|s| !s.is_empty()),
        itinerary: Some(serde_json::to_value(plan)?),
        budget_estimate: plan.budget_estimate.clone(),
        budget_breakdown: Some(serde_json::to_value(&breakdown)?),
        money_saving_tips: Some(serde_json::to_value(&plan.money_saving_tips)?),
    })
}

/// Itinerary item for one generated day, or `None` if the day is unusable.
fn item_from_day(trip_id: i64, day: &ItineraryDay) -> Option<CreateItineraryItem> {
    if let Err(err) = validate_item(day.day, &day.title) {
        tracing::warn!(trip_id, day = day.day, error = %err, "Skipping generated itinerary day");
        return None;
    }
    Some(CreateItineraryItem {
        trip_id,
        place_id: None,
        day: day.day,
        title: day.title.clone(),
        description: Some(day.activities.join(", ")).filter(|d| !d.is_empty()),
    })
}

/// POST /api/v1/planner
///
/// Generate an itinerary from the planner form and save it as a new trip
/// starting one month from today.
pub async fn generate(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<PlannerRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PlannedTrip>>)> {
    request.validate()?;
    let prompt = build_structured_prompt(&request);
    tracing::debug!(user_id = auth.user_id, destination = %request.destination, "Generating itinerary");

    let plan = state.chat.generate_trip_itinerary(&prompt).await.ok_or_else(|| {
        tracing::error!(user_id = auth.user_id, "Failed to generate AI itinerary");
        AppError::Unavailable(
            "Failed to generate itinerary. Please check your API keys and try again.".into(),
        )
    })?;

    let input = trip_from_plan(&request, &plan, Utc::now().date_naive())
        .map_err(|e| AppError::InternalError(format!("Plan serialization error: {e}")))?;
    input.validate()?;
    let trip = TripRepo::create(&state.pool, auth.user_id, &input).await?;

    let mut itinerary_items = Vec::with_capacity(plan.itinerary.len());
    for day in &plan.itinerary {
        if let Some(item) = item_from_day(trip.id, day) {
            itinerary_items.push(ItineraryItemRepo::create(&state.pool, &item).await?);
        }
    }
    tracing::info!(
        trip_id = trip.id,
        days = itinerary_items.len(),
        "AI itinerary saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PlannedTrip {
                trip: TripSummary::new(trip, Utc::now().date_naive()),
                itinerary_items,
            },
        }),
    ))
}

/// POST /api/v1/planner/test
///
/// Lightweight chat round-trip used to check the AI connection.
pub async fn test_prompt(
    State(state): State<AppState>,
    Json(input): Json<TestPromptRequest>,
) -> AppResult<Json<DataResponse<String>>> {
    let prompt = input
        .prompt
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_TEST_PROMPT);

    let reply = state
        .chat
        .generate_travel_response(prompt)
        .await
        .ok_or_else(|| AppError::Unavailable("Failed to generate AI response".into()))?;
    Ok(Json(DataResponse { data: reply }))
}

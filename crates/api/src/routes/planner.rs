//! Route definitions for the AI planner and the budget estimator.

use axum::routing::post;
use axum::Router;

use crate::handlers::{budget, planner};
use crate::state::AppState;

/// Routes mounted at `/planner`.
///
/// ```text
/// POST /      -> generate (requires auth)
/// POST /test  -> test_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(planner::generate))
        .route("/test", post(planner::test_prompt))
}

/// Routes mounted at `/budget`.
///
/// ```text
/// POST /estimate -> estimate
/// ```
pub fn budget_router() -> Router<AppState> {
    Router::new().route("/estimate", post(budget::estimate))
}

//! Handler for the stand-alone budget estimator.

use axum::Json;
use serde::{Deserialize, Serialize};
use wanderistan_core::budget::{self, BudgetBreakdown, DestinationTier};
use wanderistan_core::error::CoreError;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Request body for `POST /budget/estimate`.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub destination: Option<String>,
    pub budget: i64,
}

#[derive(Debug, Serialize)]
pub struct BudgetEstimate {
    pub destination: Option<String>,
    pub tier: DestinationTier,
    pub budget: i64,
    pub breakdown: BudgetBreakdown,
    /// Sum of the breakdown; up to a few units below `budget` from truncation.
    pub allocated: i64,
}

/// POST /api/v1/budget/estimate
pub async fn estimate(
    Json(input): Json<EstimateRequest>,
) -> AppResult<Json<DataResponse<BudgetEstimate>>> {
    if input.budget <= 0 {
        return Err(CoreError::Validation("budget must be greater than 0".into()).into());
    }
    let tier = DestinationTier::classify(input.destination.as_deref());
    let breakdown = budget::allocate_for_tier(input.budget, tier);

    Ok(Json(DataResponse {
        data: BudgetEstimate {
            allocated: breakdown.total(),
            destination: input.destination,
            tier,
            budget: input.budget,
            breakdown,
        },
    }))
}

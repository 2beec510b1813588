//! Handler for the travel chat assistant.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use wanderistan_core::chat::{extract_locations, ChatLocation, MAX_MESSAGE_CHARS};
use wanderistan_core::error::CoreError;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    /// `None` when the assistant is unavailable.
    pub response: Option<String>,
    /// Known places mentioned in the user's message, for map pins.
    pub locations: Vec<ChatLocation>,
}

fn validate_message(message: &str) -> Result<&str, CoreError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(CoreError::Validation("message must not be empty".into()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(CoreError::Validation(format!(
            "message must be at most {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(message)
}

/// POST /api/v1/chat
pub async fn send(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChatRequest>,
) -> AppResult<Json<DataResponse<ChatReply>>> {
    let message = validate_message(&input.message)?;
    let response = state.chat.generate_travel_response(message).await;
    if response.is_none() {
        tracing::warn!(user_id = auth.user_id, "Chat assistant returned no response");
    }

    Ok(Json(DataResponse {
        data: ChatReply {
            response,
            locations: extract_locations(message),
        },
    }))
}

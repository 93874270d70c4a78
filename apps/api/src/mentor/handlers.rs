//! Axum route handlers for the Mentor Chat API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::mentor::chat::mentor_reply;
use crate::mentor::tone::Tone;
use crate::models::chat::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MentorChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MentorChatResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ToneInfo {
    pub key: &'static str,
    pub system_prompt: &'static str,
}

/// POST /api/v1/mentor-chat
pub async fn handle_mentor_chat(
    State(state): State<AppState>,
    payload: Result<Json<MentorChatRequest>, JsonRejection>,
) -> Result<Json<MentorChatResponse>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;

    if request.messages.is_empty() {
        return Err(AppError::Validation("messages cannot be empty".to_string()));
    }

    let tone = Tone::resolve(request.tone.as_deref());
    let message = mentor_reply(&state.llm, tone, &request.messages).await?;

    Ok(Json(MentorChatResponse { message }))
}

/// GET /api/v1/mentor/tones
pub async fn handle_list_tones() -> Json<Vec<ToneInfo>> {
    Json(
        Tone::ALL
            .iter()
            .map(|tone| ToneInfo {
                key: tone.key(),
                system_prompt: tone.system_prompt(),
            })
            .collect(),
    )
}

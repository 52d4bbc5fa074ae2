//! The studio assistant's reply endpoint.

use axum::Json;
use glimit_core::chatbot;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: &'static str,
}

/// POST /api/chat
///
/// Keyword-matched reply to `message`. Blank messages are rejected.
pub async fn reply(Json(input): Json<ChatRequest>) -> AppResult<Json<ChatReply>> {
    if input.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message must not be empty".into()));
    }
    Ok(Json(ChatReply {
        reply: chatbot::respond(&input.message),
    }))
}

//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chats`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRequest {
    /// Creator's user id (self-reported, unverified)
    pub uid: String,
    /// Display title for the new chat
    pub chat_title: String,
}

/// Request body for `PUT /api/chats/{id}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChatRequest {
    pub updated_chat_title: String,
}

/// JSON error body for failed HTTP operations
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn chat_not_found() -> Self {
        Self {
            error: "Chat not found".to_string(),
        }
    }
}

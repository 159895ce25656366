//! HTTP API endpoint handlers.
//!
//! Chat lifecycle operations (list/create/update/delete) arrive over
//! HTTP. Create, update and delete additionally broadcast their event
//! globally so every connected client's chat list stays in sync.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{ChatId, ChatTitle, UserId},
    infrastructure::dto::{
        chat::ChatDto,
        http::{CreateChatRequest, ErrorResponse, UpdateChatRequest},
        websocket::ServerEvent,
    },
    usecase::{DeleteChatError, UpdateChatError},
};

use super::super::state::AppState;

fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::chat_not_found()))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get the full chat list
pub async fn get_chats(State(state): State<Arc<AppState>>) -> Json<Vec<ChatDto>> {
    let chats = state.list_chats_usecase.execute().await;

    // Domain Model から DTO への変換
    let chat_dtos: Vec<ChatDto> = chats.into_iter().map(Into::into).collect();
    Json(chat_dtos)
}

/// Create a new chat and broadcast `newChat` globally
pub async fn create_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateChatRequest>,
) -> Json<ChatDto> {
    let chat = state
        .create_chat_usecase
        .execute(
            ChatTitle::new(request.chat_title),
            UserId::new(request.uid),
        )
        .await;
    tracing::info!("Chat '{}' created", chat.id.as_str());

    let chat_dto: ChatDto = chat.into();
    let payload = serde_json::to_string(&ServerEvent::NewChat(chat_dto.clone())).unwrap();
    state.create_chat_usecase.broadcast_chat_created(&payload).await;

    Json(chat_dto)
}

/// Update a chat's title and broadcast `updateChat` globally
pub async fn update_chat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateChatRequest>,
) -> Result<Json<ChatDto>, (StatusCode, Json<ErrorResponse>)> {
    let Ok(chat_id) = ChatId::new(id) else {
        return Err(not_found());
    };

    match state
        .update_chat_usecase
        .execute(&chat_id, ChatTitle::new(request.updated_chat_title))
        .await
    {
        Ok(chat) => {
            let chat_dto: ChatDto = chat.into();
            let payload =
                serde_json::to_string(&ServerEvent::UpdateChat(chat_dto.clone())).unwrap();
            state.update_chat_usecase.broadcast_chat_updated(&payload).await;
            Ok(Json(chat_dto))
        }
        Err(UpdateChatError::ChatNotFound(id)) => {
            tracing::warn!("Update rejected: chat '{}' not found", id);
            Err(not_found())
        }
    }
}

/// Delete a chat and broadcast `deleteChat` globally
pub async fn delete_chat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ChatDto>, (StatusCode, Json<ErrorResponse>)> {
    let Ok(chat_id) = ChatId::new(id) else {
        return Err(not_found());
    };

    match state.delete_chat_usecase.execute(&chat_id).await {
        Ok(chat) => {
            let chat_dto: ChatDto = chat.into();
            let payload =
                serde_json::to_string(&ServerEvent::DeleteChat(chat_dto.clone())).unwrap();
            state.delete_chat_usecase.broadcast_chat_deleted(&payload).await;
            Ok(Json(chat_dto))
        }
        Err(DeleteChatError::ChatNotFound(id)) => {
            tracing::warn!("Delete rejected: chat '{}' not found", id);
            Err(not_found())
        }
    }
}

//! WebSocket connection handlers.
//!
//! Connection-scoped operations (join room, find room, post message)
//! arrive as JSON events over the socket. Every operation referencing
//! a chat id checks existence first; unknown ids produce an `error`
//! event back to the caller instead of crashing the process.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ChatId, ClockTime, ConnectionId, ConnectionIdFactory, MessageText, UserId},
    infrastructure::dto::{
        chat::{ChatDto, MessageDto},
        websocket::{ClientEvent, ErrorData, ServerEvent},
    },
    usecase::{FindRoomError, PostMessageError},
};

use super::super::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Spawns a task that receives events from the rx channel and pushes them
/// to the WebSocket sender.
///
/// This is the delivery end of the fan-out: events dispatched to this
/// connection (via its unbounded channel) are written to the socket here.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            // Send the event to this client
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Assign a transport-scoped connection id and register the connection
    let connection_id = ConnectionIdFactory::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    state
        .connect_client_usecase
        .execute(connection_id.clone(), tx)
        .await;
    tracing::info!("Connection '{}' established", connection_id.as_str());

    let (sender, mut receiver) = socket.split();

    // Spawn a task to deliver dispatched events to this client
    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_event(&state_clone, &connection_id_clone, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!(
                        "Connection '{}' requested close",
                        connection_id_clone.as_str()
                    );
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Unregister the connection and all of its room memberships
    state.disconnect_client_usecase.execute(&connection_id).await;
    tracing::info!(
        "Connection '{}' disconnected and removed from registry",
        connection_id.as_str()
    );
}

async fn handle_client_event(state: &Arc<AppState>, connection_id: &ConnectionId, text: &str) {
    tracing::debug!("Received event from '{}': {}", connection_id.as_str(), text);

    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Failed to parse client event: {}", e);
            reply_error(state, connection_id, format!("invalid event: {}", e)).await;
            return;
        }
    };

    match event {
        ClientEvent::JoinChat { chat_id } => match ChatId::new(chat_id) {
            Ok(chat_id) => {
                // Membership is nominal: accepted without store validation
                state.join_room_usecase.execute(connection_id, chat_id).await;
            }
            Err(e) => reply_error(state, connection_id, e.to_string()).await,
        },
        ClientEvent::FindGroup { chat_id } => {
            let chat_id = match ChatId::new(chat_id) {
                Ok(chat_id) => chat_id,
                Err(e) => {
                    reply_error(state, connection_id, e.to_string()).await;
                    return;
                }
            };

            match state.find_room_usecase.execute(&chat_id).await {
                Ok(message_log) => {
                    let message_dtos: Vec<MessageDto> =
                        message_log.into_iter().map(Into::into).collect();
                    let payload =
                        serde_json::to_string(&ServerEvent::FoundGroup(message_dtos)).unwrap();
                    state
                        .find_room_usecase
                        .reply_message_log(connection_id, &payload)
                        .await;
                }
                Err(e @ FindRoomError::ChatNotFound(_)) => {
                    tracing::warn!("findGroup rejected: {}", e);
                    reply_error(state, connection_id, e.to_string()).await;
                }
            }
        }
        ClientEvent::NewChatMessage {
            chat_id,
            text,
            author,
            time,
        } => {
            let chat_id = match ChatId::new(chat_id) {
                Ok(chat_id) => chat_id,
                Err(e) => {
                    reply_error(state, connection_id, e.to_string()).await;
                    return;
                }
            };

            match state
                .post_message_usecase
                .execute(
                    &chat_id,
                    MessageText::new(text),
                    UserId::new(author),
                    ClockTime::from(time),
                )
                .await
            {
                Ok((message_log, chats)) => {
                    // Deliver the full message log to the room audience
                    let message_dtos: Vec<MessageDto> =
                        message_log.into_iter().map(Into::into).collect();
                    let log_payload =
                        serde_json::to_string(&ServerEvent::FoundGroup(message_dtos)).unwrap();
                    state
                        .post_message_usecase
                        .broadcast_room_log(&chat_id, &log_payload)
                        .await;

                    // Deliver the full chat list back to the sender only
                    let chat_dtos: Vec<ChatDto> = chats.into_iter().map(Into::into).collect();
                    let list_payload =
                        serde_json::to_string(&ServerEvent::GroupList(chat_dtos)).unwrap();
                    state
                        .post_message_usecase
                        .reply_chat_list(connection_id, &list_payload)
                        .await;
                }
                Err(e @ PostMessageError::ChatNotFound(_)) => {
                    tracing::warn!("newChatMessage rejected: {}", e);
                    reply_error(state, connection_id, e.to_string()).await;
                }
            }
        }
    }
}

/// Send an `error` event back to the requesting connection only.
async fn reply_error(state: &Arc<AppState>, connection_id: &ConnectionId, message: String) {
    let payload = serde_json::to_string(&ServerEvent::Error(ErrorData { message })).unwrap();
    if let Err(e) = state.dispatcher.reply(connection_id, &payload).await {
        tracing::warn!(
            "Failed to send error event to '{}': {}",
            connection_id.as_str(),
            e
        );
    }
}

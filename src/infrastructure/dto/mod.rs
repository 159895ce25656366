//! Data Transfer Objects (DTOs) for the chat server.
//!
//! DTOs are organized by protocol:
//! - `chat`: shared chat/message representations used by both protocols
//! - `websocket`: WebSocket event DTOs
//! - `http`: HTTP API request/response DTOs

pub mod chat;
pub mod conversion;
pub mod http;
pub mod websocket;

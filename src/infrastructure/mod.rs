//! Infrastructure 層
//!
//! ドメイン層が定義する trait の具体的な実装（インメモリストア、
//! WebSocket 送信）と、プロトコル境界の DTO を提供します。

pub mod dto;
pub mod event_pusher;
pub mod registry;
pub mod repository;

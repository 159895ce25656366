//! UseCase 層
//!
//! 操作リクエストごとに1つの UseCase 構造体を定義します。各 UseCase は
//! ドメイン層の trait（`ChatRepository` / `ConnectionRegistry` /
//! `EventPusher`）にのみ依存し、具体的なトランスポートやストレージには
//! 依存しません。イベントの宛先解決と配信は `EventDispatcher` が担います。

mod connect_client;
mod create_chat;
mod delete_chat;
mod disconnect_client;
mod dispatcher;
pub mod error;
mod find_room;
mod join_room;
mod list_chats;
mod post_message;
mod update_chat;

pub use connect_client::ConnectClientUseCase;
pub use create_chat::CreateChatUseCase;
pub use delete_chat::DeleteChatUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use dispatcher::EventDispatcher;
pub use error::{DeleteChatError, FindRoomError, PostMessageError, UpdateChatError};
pub use find_room::FindRoomUseCase;
pub use join_room::JoinRoomUseCase;
pub use list_chats::ListChatsUseCase;
pub use post_message::PostMessageUseCase;
pub use update_chat::UpdateChatUseCase;

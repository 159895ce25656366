//! Server state and connection management.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, CreateChatUseCase, DeleteChatUseCase, DisconnectClientUseCase,
    EventDispatcher, FindRoomUseCase, JoinRoomUseCase, ListChatsUseCase, PostMessageUseCase,
    UpdateChatUseCase,
};

/// Shared application state
pub struct AppState {
    /// ListChatsUseCase（チャット一覧取得のユースケース）
    pub list_chats_usecase: Arc<ListChatsUseCase>,
    /// CreateChatUseCase（チャット作成のユースケース）
    pub create_chat_usecase: Arc<CreateChatUseCase>,
    /// UpdateChatUseCase（チャット更新のユースケース）
    pub update_chat_usecase: Arc<UpdateChatUseCase>,
    /// DeleteChatUseCase（チャット削除のユースケース）
    pub delete_chat_usecase: Arc<DeleteChatUseCase>,
    /// ConnectClientUseCase（クライアント接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（クライアント切断のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// FindRoomUseCase（ルーム問い合わせのユースケース）
    pub find_room_usecase: Arc<FindRoomUseCase>,
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    pub post_message_usecase: Arc<PostMessageUseCase>,
    /// EventDispatcher（façade からの直接のエラー返信用）
    pub dispatcher: Arc<EventDispatcher>,
}

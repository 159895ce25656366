//! WebSocket イベント DTO
//!
//! ワイヤ形式は adjacently tagged JSON: `{"event": "...", "data": ...}`。
//! イベント名は既存クライアントが使う socket.io 由来の名前をそのまま
//! 採用しています。

use serde::{Deserialize, Serialize};

use super::chat::{ChatDto, MessageDto};

/// クライアント → サーバーのイベント
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// ルームへの参加（ペイロードの返信なし）
    #[serde(rename_all = "camelCase")]
    JoinChat { chat_id: String },

    /// ルームのメッセージログの問い合わせ
    #[serde(rename_all = "camelCase")]
    FindGroup { chat_id: String },

    /// メッセージの投稿
    #[serde(rename_all = "camelCase")]
    NewChatMessage {
        chat_id: String,
        text: String,
        author: String,
        time: TimeData,
    },
}

/// クライアント申告の時刻フィールド
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeData {
    pub hr: u32,
    pub mins: u32,
}

/// サーバー → クライアントのイベント
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// チャット作成（グローバル配信）
    NewChat(ChatDto),

    /// チャット更新（グローバル配信）
    UpdateChat(ChatDto),

    /// チャット削除（グローバル配信）
    DeleteChat(ChatDto),

    /// メッセージログのスナップショット（ルーム配信または直接返信）
    FoundGroup(Vec<MessageDto>),

    /// チャット一覧（投稿者への直接返信）
    GroupList(Vec<ChatDto>),

    /// 操作エラーの通知（要求元への直接返信）
    Error(ErrorData),
}

/// エラーイベントのペイロード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorData {
    pub message: String,
}

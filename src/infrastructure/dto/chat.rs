//! チャット・メッセージの共有 DTO
//!
//! HTTP レスポンスと WebSocket イベントの両方で使われるワイヤ表現。
//! フィールド名は既存クライアントとの互換のため camelCase。

use serde::{Deserialize, Serialize};

/// チャットルームのワイヤ表現
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDto {
    pub id: String,
    pub title: String,
    pub creator_id: String,
    pub messages: Vec<MessageDto>,
}

/// メッセージのワイヤ表現
///
/// `time` はクライアント申告の時・分を `"{hr}:{mins}"` に整形した
/// 表示用文字列（例: `"9:5"`）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub text: String,
    pub author: String,
    pub time: String,
}

//! UseCase: ルーム問い合わせ
//!
//! ルームのメッセージログを要求元の接続だけに返します。未知のルーム
//! ID は明示的な存在チェックで検出し、`ChatNotFound` を返します
//! （プロセスは落とさない）。

use std::sync::Arc;

use crate::domain::{ChatId, ChatRepository, ConnectionId, Message};

use super::{dispatcher::EventDispatcher, error::FindRoomError};

/// ルーム問い合わせのユースケース
pub struct FindRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// EventDispatcher（宛先解決と配信の抽象化）
    dispatcher: Arc<EventDispatcher>,
}

impl FindRoomUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// ルームのメッセージログを取得する
    ///
    /// # Errors
    ///
    /// ID が未知の場合は `FindRoomError::ChatNotFound`
    pub async fn execute(&self, chat_id: &ChatId) -> Result<Vec<Message>, FindRoomError> {
        let chat = self.repository.get_chat(chat_id).await?;
        Ok(chat.messages)
    }

    /// `foundGroup` イベントを要求元の接続だけに返信する
    pub async fn reply_message_log(&self, connection_id: &ConnectionId, payload: &str) {
        if let Err(e) = self.dispatcher.reply(connection_id, payload).await {
            tracing::warn!(
                "Failed to reply foundGroup to '{}': {}",
                connection_id.as_str(),
                e
            );
        }
    }
}

//! UseCase: チャット作成
//!
//! チャットの作成は必ず成功します。作成後の `newChat` イベントは
//! チャット一覧ビューを全ユーザーで同期させるため、ルーム参加の有無に
//! かかわらず接続中の全クライアントへ配信されます。

use std::sync::Arc;

use crate::domain::{Chat, ChatRepository, ChatTitle, UserId};

use super::dispatcher::EventDispatcher;

/// チャット作成のユースケース
pub struct CreateChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// EventDispatcher（宛先解決と配信の抽象化）
    dispatcher: Arc<EventDispatcher>,
}

impl CreateChatUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// チャットを作成し、作成されたチャットを返す
    pub async fn execute(&self, title: ChatTitle, creator_id: UserId) -> Chat {
        self.repository.create_chat(title, creator_id).await
    }

    /// `newChat` イベントをグローバル配信する
    ///
    /// # Arguments
    ///
    /// * `payload` - 配信する JSON イベント（DTO 層で生成されたもの）
    pub async fn broadcast_chat_created(&self, payload: &str) {
        if let Err(e) = self.dispatcher.broadcast_global(payload).await {
            tracing::warn!("Failed to broadcast newChat event: {}", e);
        }
    }
}

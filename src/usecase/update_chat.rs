//! UseCase: チャット更新（タイトル変更）

use std::sync::Arc;

use crate::domain::{Chat, ChatId, ChatRepository, ChatTitle};

use super::{dispatcher::EventDispatcher, error::UpdateChatError};

/// チャット更新のユースケース
pub struct UpdateChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// EventDispatcher（宛先解決と配信の抽象化）
    dispatcher: Arc<EventDispatcher>,
}

impl UpdateChatUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// タイトルを変更し、変更後のチャットを返す
    ///
    /// # Errors
    ///
    /// ID が未知の場合は `UpdateChatError::ChatNotFound`
    pub async fn execute(
        &self,
        chat_id: &ChatId,
        title: ChatTitle,
    ) -> Result<Chat, UpdateChatError> {
        let chat = self.repository.update_chat_title(chat_id, title).await?;
        Ok(chat)
    }

    /// `updateChat` イベントをグローバル配信する
    pub async fn broadcast_chat_updated(&self, payload: &str) {
        if let Err(e) = self.dispatcher.broadcast_global(payload).await {
            tracing::warn!("Failed to broadcast updateChat event: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::infrastructure::{
        event_pusher::WebSocketEventPusher, registry::InMemoryConnectionRegistry,
        repository::InMemoryChatRepository,
    };

    fn create_test_usecase() -> (UpdateChatUseCase, Arc<InMemoryChatRepository>) {
        let repository = Arc::new(InMemoryChatRepository::new());
        let dispatcher = Arc::new(EventDispatcher::new(
            Arc::new(InMemoryConnectionRegistry::new()),
            Arc::new(WebSocketEventPusher::new()),
        ));
        let usecase = UpdateChatUseCase::new(repository.clone(), dispatcher);
        (usecase, repository)
    }

    #[tokio::test]
    async fn test_update_chat_success() {
        // テスト項目: タイトル変更が成功し、変更後のチャットが返される
        // given (前提条件):
        let (usecase, repository) = create_test_usecase();
        let chat = repository
            .create_chat(
                ChatTitle::new("General".to_string()),
                UserId::new("u1".to_string()),
            )
            .await;

        // when (操作):
        let result = usecase
            .execute(&chat.id, ChatTitle::new("Renamed".to_string()))
            .await;

        // then (期待する結果):
        let updated = result.unwrap();
        assert_eq!(updated.id, chat.id);
        assert_eq!(updated.title.as_str(), "Renamed");
    }

    #[tokio::test]
    async fn test_update_unknown_chat_returns_not_found() {
        // テスト項目: 存在しない ID の更新は ChatNotFound
        // given (前提条件):
        let (usecase, _repository) = create_test_usecase();
        let unknown = ChatId::new("no-such-chat".to_string()).unwrap();

        // when (操作):
        let result = usecase
            .execute(&unknown, ChatTitle::new("x".to_string()))
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UpdateChatError::ChatNotFound("no-such-chat".to_string()))
        );
    }
}

//! UseCase: チャット削除
//!
//! 削除はストアからの除去に加えて、Connection Registry の全ルーティング
//! テーブルからも当該ルーム ID を取り除きます。削除済みルームへの
//! 購読が残ってダングリングすることはありません。

use std::sync::Arc;

use crate::domain::{Chat, ChatId, ChatRepository, ConnectionRegistry};

use super::{dispatcher::EventDispatcher, error::DeleteChatError};

/// チャット削除のユースケース
pub struct DeleteChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// ConnectionRegistry（ルーティングテーブルの抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// EventDispatcher（宛先解決と配信の抽象化）
    dispatcher: Arc<EventDispatcher>,
}

impl DeleteChatUseCase {
    pub fn new(
        repository: Arc<dyn ChatRepository>,
        registry: Arc<dyn ConnectionRegistry>,
        dispatcher: Arc<EventDispatcher>,
    ) -> Self {
        Self {
            repository,
            registry,
            dispatcher,
        }
    }

    /// チャットを削除し、削除されたチャットを返す
    ///
    /// # Errors
    ///
    /// ID が未知の場合は `DeleteChatError::ChatNotFound`
    pub async fn execute(&self, chat_id: &ChatId) -> Result<Chat, DeleteChatError> {
        let chat = self.repository.delete_chat(chat_id).await?;

        // ルーティングテーブルからも除去する
        self.registry.remove_room(chat_id).await;

        Ok(chat)
    }

    /// `deleteChat` イベントをグローバル配信する
    pub async fn broadcast_chat_deleted(&self, payload: &str) {
        if let Err(e) = self.dispatcher.broadcast_global(payload).await {
            tracing::warn!("Failed to broadcast deleteChat event: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatTitle, ConnectionId, Timestamp, UserId};
    use crate::infrastructure::{
        event_pusher::WebSocketEventPusher, registry::InMemoryConnectionRegistry,
        repository::InMemoryChatRepository,
    };

    fn create_test_usecase() -> (
        DeleteChatUseCase,
        Arc<InMemoryChatRepository>,
        Arc<InMemoryConnectionRegistry>,
    ) {
        let repository = Arc::new(InMemoryChatRepository::new());
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let dispatcher = Arc::new(EventDispatcher::new(
            registry.clone(),
            Arc::new(WebSocketEventPusher::new()),
        ));
        let usecase = DeleteChatUseCase::new(repository.clone(), registry.clone(), dispatcher);
        (usecase, repository, registry)
    }

    #[tokio::test]
    async fn test_delete_chat_success() {
        // テスト項目: 削除されたチャットが返され、ストアから消える
        // given (前提条件):
        let (usecase, repository, _registry) = create_test_usecase();
        let chat = repository
            .create_chat(
                ChatTitle::new("General".to_string()),
                UserId::new("u1".to_string()),
            )
            .await;

        // when (操作):
        let result = usecase.execute(&chat.id).await;

        // then (期待する結果):
        assert_eq!(result.unwrap().id, chat.id);
        assert!(repository.get_chat(&chat.id).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_unknown_chat_returns_not_found() {
        // テスト項目: 存在しない ID の削除は ChatNotFound
        // given (前提条件):
        let (usecase, _repository, _registry) = create_test_usecase();
        let unknown = ChatId::new("no-such-chat".to_string()).unwrap();

        // when (操作):
        let result = usecase.execute(&unknown).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(DeleteChatError::ChatNotFound("no-such-chat".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_chat_purges_room_memberships() {
        // テスト項目: 削除と同時にルームの購読者集合が破棄される
        // given (前提条件):
        let (usecase, repository, registry) = create_test_usecase();
        let chat = repository
            .create_chat(
                ChatTitle::new("General".to_string()),
                UserId::new("u1".to_string()),
            )
            .await;

        let alice = ConnectionId::new("alice".to_string()).unwrap();
        registry.register(alice.clone(), Timestamp::new(1000)).await;
        registry.join(&alice, chat.id.clone()).await;
        assert_eq!(registry.members_of(&chat.id).await.len(), 1);

        // when (操作):
        usecase.execute(&chat.id).await.unwrap();

        // then (期待する結果):
        assert!(registry.members_of(&chat.id).await.is_empty());
    }
}

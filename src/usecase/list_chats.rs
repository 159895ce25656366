//! UseCase: チャット一覧取得

use std::sync::Arc;

use crate::domain::{Chat, ChatRepository};

/// チャット一覧取得のユースケース
pub struct ListChatsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl ListChatsUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// 全チャットのスナップショットを作成順で返す
    pub async fn execute(&self) -> Vec<Chat> {
        self.repository.list_chats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatTitle, UserId};
    use crate::infrastructure::repository::InMemoryChatRepository;

    #[tokio::test]
    async fn test_list_chats_returns_snapshot_in_creation_order() {
        // テスト項目: 一覧が作成順で返される
        // given (前提条件):
        let repository = Arc::new(InMemoryChatRepository::new());
        let usecase = ListChatsUseCase::new(repository.clone());
        repository
            .create_chat(
                ChatTitle::new("General".to_string()),
                UserId::new("u1".to_string()),
            )
            .await;
        repository
            .create_chat(
                ChatTitle::new("Random".to_string()),
                UserId::new("u2".to_string()),
            )
            .await;

        // when (操作):
        let chats = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(chats.len(), 2);
        assert_eq!(chats[0].title.as_str(), "General");
        assert_eq!(chats[1].title.as_str(), "Random");
    }

    #[tokio::test]
    async fn test_list_chats_on_empty_store() {
        // テスト項目: チャットが存在しなければ空のリストが返される
        // given (前提条件):
        let repository = Arc::new(InMemoryChatRepository::new());
        let usecase = ListChatsUseCase::new(repository);

        // when (操作):
        let chats = usecase.execute().await;

        // then (期待する結果):
        assert!(chats.is_empty());
    }
}

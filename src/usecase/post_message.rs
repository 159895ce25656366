//! UseCase: メッセージ投稿
//!
//! 投稿のたびに新しいメッセージ ID を採番し、著者・時刻フィールドは
//! リクエストの値をそのまま使います（サーバー時計は関与しない）。
//! 追記とルーム配信は同一実行内で逐次に行われるため、ルームの購読者は
//! ログのスナップショットを追記順で観測します。
//!
//! 存在しないルーム ID への投稿は追記前の存在チェックで検出し、
//! `ChatNotFound` を返します。

use std::sync::Arc;

use crate::domain::{
    Chat, ChatId, ChatRepository, ClockTime, ConnectionId, Message, MessageIdFactory, MessageText,
    UserId,
};

use super::{dispatcher::EventDispatcher, error::PostMessageError};

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// EventDispatcher（宛先解決と配信の抽象化）
    dispatcher: Arc<EventDispatcher>,
}

impl PostMessageUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// メッセージを追記する
    ///
    /// # Returns
    ///
    /// * 更新後のメッセージログ全体（ルーム配信のペイロード用）
    /// * 全チャット一覧（投稿者への groupList 返信用）
    ///
    /// # Errors
    ///
    /// ルーム ID が未知の場合は `PostMessageError::ChatNotFound`
    pub async fn execute(
        &self,
        chat_id: &ChatId,
        text: MessageText,
        author: UserId,
        time: ClockTime,
    ) -> Result<(Vec<Message>, Vec<Chat>), PostMessageError> {
        let message = Message::new(MessageIdFactory::generate(), text, author, time);

        let message_log = self.repository.append_message(chat_id, message).await?;
        let chats = self.repository.list_chats().await;

        Ok((message_log, chats))
    }

    /// `foundGroup`（ログのスナップショット）をルームの購読者へ配信する
    pub async fn broadcast_room_log(&self, chat_id: &ChatId, payload: &str) {
        if let Err(e) = self.dispatcher.broadcast_room(chat_id, payload).await {
            tracing::warn!(
                "Failed to broadcast message log for room '{}': {}",
                chat_id.as_str(),
                e
            );
        }
    }

    /// `groupList`（チャット一覧）を投稿者だけに返信する
    pub async fn reply_chat_list(&self, connection_id: &ConnectionId, payload: &str) {
        if let Err(e) = self.dispatcher.reply(connection_id, payload).await {
            tracing::warn!(
                "Failed to reply groupList to '{}': {}",
                connection_id.as_str(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatTitle, ConnectionRegistry, EventPusher, Timestamp};
    use crate::infrastructure::{
        event_pusher::WebSocketEventPusher, registry::InMemoryConnectionRegistry,
        repository::InMemoryChatRepository,
    };
    use tokio::sync::mpsc;

    fn create_test_usecase() -> (
        PostMessageUseCase,
        Arc<InMemoryChatRepository>,
        Arc<InMemoryConnectionRegistry>,
        Arc<WebSocketEventPusher>,
    ) {
        let repository = Arc::new(InMemoryChatRepository::new());
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let pusher = Arc::new(WebSocketEventPusher::new());
        let dispatcher = Arc::new(EventDispatcher::new(registry.clone(), pusher.clone()));
        let usecase = PostMessageUseCase::new(repository.clone(), dispatcher);
        (usecase, repository, registry, pusher)
    }

    async fn create_test_chat(repository: &InMemoryChatRepository, title: &str) -> Chat {
        repository
            .create_chat(
                ChatTitle::new(title.to_string()),
                UserId::new("u1".to_string()),
            )
            .await
    }

    #[tokio::test]
    async fn test_post_message_appends_and_returns_log_and_chat_list() {
        // テスト項目: 投稿で採番済みメッセージが追記され、ログと一覧が返される
        // given (前提条件):
        let (usecase, repository, _registry, _pusher) = create_test_usecase();
        let chat = create_test_chat(&repository, "General").await;

        // when (操作):
        let result = usecase
            .execute(
                &chat.id,
                MessageText::new("hi".to_string()),
                UserId::new("u1".to_string()),
                ClockTime::new(9, 5),
            )
            .await;

        // then (期待する結果):
        let (log, chats) = result.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].text.as_str(), "hi");
        assert_eq!(log[0].author.as_str(), "u1");
        assert_eq!(log[0].time, ClockTime::new(9, 5));
        assert!(!log[0].id.as_str().is_empty());

        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].messages.len(), 1);
    }

    #[tokio::test]
    async fn test_post_to_unknown_chat_returns_not_found() {
        // テスト項目: 存在しないルームへの投稿は ChatNotFound
        // given (前提条件):
        let (usecase, _repository, _registry, _pusher) = create_test_usecase();
        let unknown = ChatId::new("no-such-chat".to_string()).unwrap();

        // when (操作):
        let result = usecase
            .execute(
                &unknown,
                MessageText::new("hi".to_string()),
                UserId::new("u1".to_string()),
                ClockTime::new(9, 5),
            )
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(PostMessageError::ChatNotFound("no-such-chat".to_string()))
        );
    }

    #[tokio::test]
    async fn test_sequential_posts_preserve_order_across_interleaving() {
        // テスト項目: 他ルームへの投稿が挟まってもルーム内の順序が保たれる
        // given (前提条件):
        let (usecase, repository, _registry, _pusher) = create_test_usecase();
        let chat_a = create_test_chat(&repository, "A").await;
        let chat_b = create_test_chat(&repository, "B").await;

        // when (操作): A → B → A → A の順で投稿
        for (chat_id, text) in [
            (&chat_a.id, "a1"),
            (&chat_b.id, "b1"),
            (&chat_a.id, "a2"),
            (&chat_a.id, "a3"),
        ] {
            usecase
                .execute(
                    chat_id,
                    MessageText::new(text.to_string()),
                    UserId::new("u1".to_string()),
                    ClockTime::new(9, 5),
                )
                .await
                .unwrap();
        }

        // then (期待する結果):
        let stored_a = repository.get_chat(&chat_a.id).await.unwrap();
        let texts: Vec<&str> = stored_a
            .messages
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a1", "a2", "a3"]);
    }

    #[tokio::test]
    async fn test_broadcast_room_log_reaches_members_only() {
        // テスト項目: ルーム配信は参加者だけに届き、未参加の接続には届かない
        // given (前提条件):
        let (usecase, repository, registry, pusher) = create_test_usecase();
        let chat = create_test_chat(&repository, "General").await;

        let member = ConnectionId::new("member".to_string()).unwrap();
        let outsider = ConnectionId::new("outsider".to_string()).unwrap();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry.register(member.clone(), Timestamp::new(1000)).await;
        registry
            .register(outsider.clone(), Timestamp::new(1000))
            .await;
        registry.join(&member, chat.id.clone()).await;
        pusher.register_client(member, tx1).await;
        pusher.register_client(outsider, tx2).await;

        // when (操作):
        usecase
            .broadcast_room_log(&chat.id, r#"{"event":"foundGroup"}"#)
            .await;

        // then (期待する結果):
        assert_eq!(
            rx1.recv().await,
            Some(r#"{"event":"foundGroup"}"#.to_string())
        );
        assert!(rx2.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_reply_chat_list_goes_to_sender_only() {
        // テスト項目: groupList は投稿者の接続だけに返信される
        // given (前提条件):
        let (usecase, _repository, registry, pusher) = create_test_usecase();

        let sender = ConnectionId::new("sender".to_string()).unwrap();
        let other = ConnectionId::new("other".to_string()).unwrap();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry.register(sender.clone(), Timestamp::new(1000)).await;
        registry.register(other.clone(), Timestamp::new(1000)).await;
        pusher.register_client(sender.clone(), tx1).await;
        pusher.register_client(other, tx2).await;

        // when (操作):
        usecase
            .reply_chat_list(&sender, r#"{"event":"groupList"}"#)
            .await;

        // then (期待する結果):
        assert_eq!(
            rx1.recv().await,
            Some(r#"{"event":"groupList"}"#.to_string())
        );
        assert!(rx2.try_recv().is_err());
    }
}

//! InMemory Chat Repository 実装
//!
//! ドメイン層が定義する ChatRepository trait の具体的な実装。
//! 作成順を保つため `Vec<Chat>` をインメモリ DB として使用します。
//! 全操作が単一の Mutex を通るため、ストアへの書き込みは常に
//! 逐次化されます（single-writer）。

use tokio::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    Chat, ChatId, ChatIdFactory, ChatRepository, ChatTitle, Message, RepositoryError, UserId,
};

/// インメモリ Chat Repository 実装
pub struct InMemoryChatRepository {
    /// 生存中の全チャット（作成順）
    chats: Mutex<Vec<Chat>>,
}

impl InMemoryChatRepository {
    /// 空のストアを持つ新しい InMemoryChatRepository を作成
    pub fn new() -> Self {
        Self {
            chats: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryChatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn list_chats(&self) -> Vec<Chat> {
        let chats = self.chats.lock().await;
        chats.clone()
    }

    async fn create_chat(&self, title: ChatTitle, creator_id: UserId) -> Chat {
        let chat = Chat::new(ChatIdFactory::generate(), title, creator_id);

        let mut chats = self.chats.lock().await;
        chats.push(chat.clone());
        chat
    }

    async fn update_chat_title(
        &self,
        chat_id: &ChatId,
        title: ChatTitle,
    ) -> Result<Chat, RepositoryError> {
        let mut chats = self.chats.lock().await;
        let chat = chats
            .iter_mut()
            .find(|chat| &chat.id == chat_id)
            .ok_or_else(|| RepositoryError::ChatNotFound(chat_id.as_str().to_string()))?;

        chat.rename(title);
        Ok(chat.clone())
    }

    async fn delete_chat(&self, chat_id: &ChatId) -> Result<Chat, RepositoryError> {
        let mut chats = self.chats.lock().await;
        let index = chats
            .iter()
            .position(|chat| &chat.id == chat_id)
            .ok_or_else(|| RepositoryError::ChatNotFound(chat_id.as_str().to_string()))?;

        Ok(chats.remove(index))
    }

    async fn get_chat(&self, chat_id: &ChatId) -> Result<Chat, RepositoryError> {
        let chats = self.chats.lock().await;
        chats
            .iter()
            .find(|chat| &chat.id == chat_id)
            .cloned()
            .ok_or_else(|| RepositoryError::ChatNotFound(chat_id.as_str().to_string()))
    }

    async fn append_message(
        &self,
        chat_id: &ChatId,
        message: Message,
    ) -> Result<Vec<Message>, RepositoryError> {
        let mut chats = self.chats.lock().await;
        let chat = chats
            .iter_mut()
            .find(|chat| &chat.id == chat_id)
            .ok_or_else(|| RepositoryError::ChatNotFound(chat_id.as_str().to_string()))?;

        chat.append_message(message);
        Ok(chat.messages.clone())
    }
}

//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    entity::{Chat, Message},
    error::RepositoryError,
    value_object::{ChatId, ChatTitle, UserId},
};

/// Chat Store への抽象インターフェース
///
/// ルックアップはすべて `ChatId` の等値比較で行われます。生存中の
/// Chat の `id` は一意であり、削除されるまでストアに存在し続けます。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// 全チャットのスナップショットを作成順で取得
    async fn list_chats(&self) -> Vec<Chat>;

    /// 新しいチャットを作成（ID は内部で採番、必ず成功する）
    async fn create_chat(&self, title: ChatTitle, creator_id: UserId) -> Chat;

    /// チャットのタイトルを変更し、変更後のチャットを返す
    async fn update_chat_title(
        &self,
        chat_id: &ChatId,
        title: ChatTitle,
    ) -> Result<Chat, RepositoryError>;

    /// チャットを削除し、削除されたチャットを返す
    async fn delete_chat(&self, chat_id: &ChatId) -> Result<Chat, RepositoryError>;

    /// チャットを ID で取得
    async fn get_chat(&self, chat_id: &ChatId) -> Result<Chat, RepositoryError>;

    /// メッセージをログ末尾に追加し、更新後のログ全体を返す
    async fn append_message(
        &self,
        chat_id: &ChatId,
        message: Message,
    ) -> Result<Vec<Message>, RepositoryError>;
}

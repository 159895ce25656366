//! Connection Registry trait 定義
//!
//! 生存中の接続と、接続⇔ルームの多対多のメンバーシップ関係を管理する
//! インターフェース。メンバーシップは名目的な関連（ルーム ID の集合）で
//! あり、Chat Store に対する検証は行いません。存在しないルーム ID への
//! join も受理されます。

use async_trait::async_trait;

use super::value_object::{ChatId, ConnectionId, Timestamp};

/// 接続とルームメンバーシップの登記簿
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 接続確立時に呼ばれる
    async fn register(&self, connection_id: ConnectionId, connected_at: Timestamp);

    /// 切断時に呼ばれる。全ルームのメンバーシップからも除去される。
    /// 未登録の ID に対して呼んでも安全（冪等）。
    async fn unregister(&self, connection_id: &ConnectionId);

    /// 接続をルームに参加させる。ルーム ID の実在は検証しない。
    /// 同じルームへの二重 join は no-op。
    async fn join(&self, connection_id: &ConnectionId, chat_id: ChatId);

    /// ルームに参加中の全接続を取得（いなければ空）
    async fn members_of(&self, chat_id: &ChatId) -> Vec<ConnectionId>;

    /// 現在接続中の全接続を取得（グローバルイベントの宛先）
    async fn all_connections(&self) -> Vec<ConnectionId>;

    /// 削除されたルームの ID を全ルーティングテーブルから除去する
    async fn remove_room(&self, chat_id: &ChatId);
}

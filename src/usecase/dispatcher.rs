//! Fan-out Dispatcher
//!
//! イベントとそのスコープ宣言を受け取り、正しい宛先（audience）へ配信
//! します：
//!
//! - グローバルイベント（newChat / updateChat / deleteChat）
//!   → 現在接続中の全クライアント（ルーム参加の有無は問わない）
//! - ルームスコープのイベント（foundGroup）
//!   → `members_of(chat_id)` で解決されるルームの購読者のみ
//! - 直接返信（groupList、foundGroup の問い合わせ応答、error）
//!   → 要求元の接続のみ
//!
//! 宛先解決は Connection Registry、配信は EventPusher に委譲します。

use std::sync::Arc;

use crate::domain::{ChatId, ConnectionId, ConnectionRegistry, EventPusher, PushError};

/// イベントの宛先解決と配信を担うディスパッチャ
pub struct EventDispatcher {
    /// ConnectionRegistry（宛先解決の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// EventPusher（イベント通知の抽象化）
    pusher: Arc<dyn EventPusher>,
}

impl EventDispatcher {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// 接続中の全クライアントへ配信する
    ///
    /// # Returns
    ///
    /// 配信対象となった接続 ID のリスト
    pub async fn broadcast_global(&self, payload: &str) -> Result<Vec<ConnectionId>, PushError> {
        let targets = self.registry.all_connections().await;
        self.pusher.broadcast(targets.clone(), payload).await?;
        Ok(targets)
    }

    /// ルームの購読者のみへ配信する
    ///
    /// 宛先はルーム ID をキーに Connection Registry で解決します。
    /// 購読者のいないルームへの配信は no-op です。
    pub async fn broadcast_room(
        &self,
        chat_id: &ChatId,
        payload: &str,
    ) -> Result<Vec<ConnectionId>, PushError> {
        let targets = self.registry.members_of(chat_id).await;
        self.pusher.broadcast(targets.clone(), payload).await?;
        Ok(targets)
    }

    /// 要求元の接続1つだけへ返信する
    pub async fn reply(
        &self,
        connection_id: &ConnectionId,
        payload: &str,
    ) -> Result<(), PushError> {
        self.pusher.push_to(connection_id, payload).await
    }
}

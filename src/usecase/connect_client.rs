//! UseCase: クライアント接続処理
//!
//! WebSocket 接続の確立時に、接続を Connection Registry と EventPusher の
//! 両方に登録します。接続 ID はトランスポート層（UI 層）が採番します。

use std::sync::Arc;

use crate::common::time::get_jst_timestamp;
use crate::domain::{ConnectionId, ConnectionRegistry, EventPusher, PusherChannel, Timestamp};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// ConnectionRegistry（メンバーシップ管理の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// EventPusher（イベント通知の抽象化）
    pusher: Arc<dyn EventPusher>,
}

impl ConnectClientUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// 接続を登録する
    ///
    /// # Arguments
    ///
    /// * `connection_id` - トランスポート層が採番した接続 ID
    /// * `sender` - この接続へのイベント送信用チャンネル
    pub async fn execute(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let connected_at = Timestamp::new(get_jst_timestamp());
        self.registry
            .register(connection_id.clone(), connected_at)
            .await;
        self.pusher.register_client(connection_id, sender).await;
    }
}

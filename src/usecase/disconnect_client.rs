//! UseCase: クライアント切断処理
//!
//! 切断時に接続を Connection Registry（全ルームのメンバーシップを含む）と
//! EventPusher の両方から除去します。二重に呼ばれても安全です（冪等）。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, EventPusher};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// ConnectionRegistry（メンバーシップ管理の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// EventPusher（イベント通知の抽象化）
    pusher: Arc<dyn EventPusher>,
}

impl DisconnectClientUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// 接続の登録を解除する（冪等）
    pub async fn execute(&self, connection_id: &ConnectionId) {
        self.registry.unregister(connection_id).await;
        self.pusher.unregister_client(connection_id).await;
    }
}

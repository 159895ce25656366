//! UseCase: ルーム参加
//!
//! メンバーシップは名目的な関連であり、Chat Store に対する実在検証は
//! 行いません。存在しないルーム ID への参加も
//! 受理され、後続のディスパッチ時に宛先として解決されるだけです。

use std::sync::Arc;

use crate::domain::{ChatId, ConnectionId, ConnectionRegistry};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// ConnectionRegistry（メンバーシップ管理の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 接続をルームの購読者に加える（無条件に受理、返信ペイロードなし）
    pub async fn execute(&self, connection_id: &ConnectionId, chat_id: ChatId) {
        self.registry.join(connection_id, chat_id.clone()).await;
        tracing::info!(
            "Connection '{}' joined room '{}'",
            connection_id.as_str(),
            chat_id.as_str()
        );
    }
}

//! EventPusher trait 定義
//!
//! 接続へのイベント送信の抽象化。UseCase 層はこの trait に依存し、
//! WebSocket などの具体的なトランスポートには依存しません。
//! 送信は fire-and-forget（ACK・再送・バックプレッシャーなし）です。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::PushError, value_object::ConnectionId};

/// 接続ごとの送信チャンネル
///
/// unbounded チャンネルを使うことで、遅い接続が他の接続への配信を
/// ブロックしない（送信は即座に完了する）。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// イベント送信の抽象インターフェース
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPusher: Send + Sync {
    /// 接続の送信チャンネルを登録する
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続の送信チャンネルを破棄する（冪等）
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定の接続にイベントを送信する
    async fn push_to(&self, connection_id: &ConnectionId, payload: &str) -> Result<(), PushError>;

    /// 複数の接続にイベントを送信する。一部の送信失敗は許容される。
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        payload: &str,
    ) -> Result<(), PushError>;
}

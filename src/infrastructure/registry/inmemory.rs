//! InMemory Connection Registry 実装
//!
//! 接続⇔ルームの多対多関係を、順方向（接続 → 参加ルーム集合）と
//! 逆方向（ルーム → 購読者集合）の2つのマップで保持します。
//! 両マップは同一の Mutex の内側で常に同期して更新されるため、
//! 片方だけが更新された状態は観測されません。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatId, ConnectionId, ConnectionRegistry, Timestamp};

/// 1接続分の登記情報
struct ConnectionEntry {
    /// 参加中のルーム ID 集合（名目的、Chat Store とは独立）
    joined: HashSet<ChatId>,
    /// 接続時刻（JST ミリ秒）
    #[allow(dead_code)]
    connected_at: Timestamp,
}

#[derive(Default)]
struct RegistryInner {
    /// 接続 → 登記情報
    connections: HashMap<ConnectionId, ConnectionEntry>,
    /// ルーム → 購読者集合（members_of の解決用）
    rooms: HashMap<ChatId, HashSet<ConnectionId>>,
}

/// インメモリ Connection Registry 実装
pub struct InMemoryConnectionRegistry {
    inner: Mutex<RegistryInner>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner::default()),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, connection_id: ConnectionId, connected_at: Timestamp) {
        let mut inner = self.inner.lock().await;
        inner.connections.insert(
            connection_id.clone(),
            ConnectionEntry {
                joined: HashSet::new(),
                connected_at,
            },
        );
        tracing::debug!("Connection '{}' registered", connection_id.as_str());
    }

    async fn unregister(&self, connection_id: &ConnectionId) {
        let mut inner = self.inner.lock().await;
        let Some(entry) = inner.connections.remove(connection_id) else {
            // 既に未登録なら何もしない（冪等）
            return;
        };

        for chat_id in &entry.joined {
            if let Some(members) = inner.rooms.get_mut(chat_id) {
                members.remove(connection_id);
                if members.is_empty() {
                    inner.rooms.remove(chat_id);
                }
            }
        }
        tracing::debug!("Connection '{}' unregistered", connection_id.as_str());
    }

    async fn join(&self, connection_id: &ConnectionId, chat_id: ChatId) {
        let mut inner = self.inner.lock().await;
        let Some(entry) = inner.connections.get_mut(connection_id) else {
            tracing::warn!(
                "Connection '{}' not registered, ignoring join to '{}'",
                connection_id.as_str(),
                chat_id.as_str()
            );
            return;
        };

        entry.joined.insert(chat_id.clone());
        inner
            .rooms
            .entry(chat_id)
            .or_default()
            .insert(connection_id.clone());
    }

    async fn members_of(&self, chat_id: &ChatId) -> Vec<ConnectionId> {
        let inner = self.inner.lock().await;
        let mut members: Vec<ConnectionId> = inner
            .rooms
            .get(chat_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default();

        // Sort for consistent ordering
        members.sort();
        members
    }

    async fn all_connections(&self) -> Vec<ConnectionId> {
        let inner = self.inner.lock().await;
        let mut connections: Vec<ConnectionId> = inner.connections.keys().cloned().collect();

        // Sort for consistent ordering
        connections.sort();
        connections
    }

    async fn remove_room(&self, chat_id: &ChatId) {
        let mut inner = self.inner.lock().await;
        inner.rooms.remove(chat_id);
        for entry in inner.connections.values_mut() {
            entry.joined.remove(chat_id);
        }
    }
}

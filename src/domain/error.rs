//! ドメイン層のエラー型定義

use thiserror::Error;

/// 値オブジェクト生成時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("id must not be empty")]
    EmptyId,
}

/// Repository 操作のエラー
///
/// 構造化されたエラーは「参照先のチャットが存在しない」の一種類のみ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("chat '{0}' not found")]
    ChatNotFound(String),
}

/// メッセージ送信（push）のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    #[error("connection '{0}' not found")]
    ConnectionNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}

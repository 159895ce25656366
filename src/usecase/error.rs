//! UseCase 層のエラー型定義
//!
//! チャット ID を参照する操作はすべて、存在チェックに失敗した場合に
//! 構造化されたエラーを呼び出し元へ返します（silent failure やクラッシュ
//! は許容しない）。

use thiserror::Error;

use crate::domain::RepositoryError;

/// チャット更新のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateChatError {
    #[error("chat '{0}' not found")]
    ChatNotFound(String),
}

impl From<RepositoryError> for UpdateChatError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::ChatNotFound(id) => Self::ChatNotFound(id),
        }
    }
}

/// チャット削除のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteChatError {
    #[error("chat '{0}' not found")]
    ChatNotFound(String),
}

impl From<RepositoryError> for DeleteChatError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::ChatNotFound(id) => Self::ChatNotFound(id),
        }
    }
}

/// ルーム問い合わせのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindRoomError {
    #[error("chat '{0}' not found")]
    ChatNotFound(String),
}

impl From<RepositoryError> for FindRoomError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::ChatNotFound(id) => Self::ChatNotFound(id),
        }
    }
}

/// メッセージ投稿のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostMessageError {
    #[error("chat '{0}' not found")]
    ChatNotFound(String),
}

impl From<RepositoryError> for PostMessageError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::ChatNotFound(id) => Self::ChatNotFound(id),
        }
    }
}

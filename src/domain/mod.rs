//! ドメイン層
//!
//! チャットルームとメッセージのエンティティ、値オブジェクト、
//! そして下位層が実装するインターフェース（trait）を定義します。
//! このモジュールは他の層（usecase / infrastructure / ui）に依存しません。

pub mod entity;
pub mod error;
pub mod pusher;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::{Chat, Message};
pub use error::{DomainError, PushError, RepositoryError};
pub use pusher::{EventPusher, PusherChannel};
pub use registry::ConnectionRegistry;
pub use repository::ChatRepository;
pub use value_object::{
    ChatId, ChatIdFactory, ChatTitle, ClockTime, ConnectionId, ConnectionIdFactory, MessageId,
    MessageIdFactory, MessageText, Timestamp, UserId,
};

#[cfg(test)]
pub use pusher::MockEventPusher;
#[cfg(test)]
pub use registry::MockConnectionRegistry;
#[cfg(test)]
pub use repository::MockChatRepository;

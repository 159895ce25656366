//! 値オブジェクト
//!
//! ID 類は UUID v4 の文字列を包む newtype として定義し、空文字列のみを
//! 拒否します（ID は不透明な値であり、それ以上の形式検証は行いません）。
//! タイトル・本文・著者名は無検証の不透明な値です。

use std::fmt;

use uuid::Uuid;

use super::error::DomainError;

/// チャットルームの識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(String);

impl ChatId {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::EmptyId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ChatId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// ChatId を新規採番するファクトリ
pub struct ChatIdFactory;

impl ChatIdFactory {
    pub fn generate() -> ChatId {
        ChatId(Uuid::new_v4().to_string())
    }
}

/// メッセージの識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::EmptyId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// MessageId を新規採番するファクトリ
pub struct MessageIdFactory;

impl MessageIdFactory {
    pub fn generate() -> MessageId {
        MessageId(Uuid::new_v4().to_string())
    }
}

/// 接続（WebSocket セッション）の識別子
///
/// サーバー側が接続確立時に採番します。接続の寿命 = トランスポート
/// セッションの寿命です。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::EmptyId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// ConnectionId を新規採番するファクトリ
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    pub fn generate() -> ConnectionId {
        ConnectionId(Uuid::new_v4().to_string())
    }
}

/// ユーザー識別子
///
/// 送信者が自己申告する不透明な値。認証は行いません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// チャットルームのタイトル
///
/// 無検証（長さ・内容の制約なし）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTitle(String);

impl ChatTitle {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// メッセージ本文
///
/// 無検証（長さ・内容の制約なし）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// クライアント申告の時刻（時・分）
///
/// サーバー時計は関与しません。日付・タイムゾーンを持たず、表示形式は
/// ゼロ埋めなしの `"{hr}:{mins}"`（例: `"9:5"`）です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hr: u32,
    mins: u32,
}

impl ClockTime {
    pub fn new(hr: u32, mins: u32) -> Self {
        Self { hr, mins }
    }

    pub fn hr(&self) -> u32 {
        self.hr
    }

    pub fn mins(&self) -> u32 {
        self.mins
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hr, self.mins)
    }
}

/// Unix タイムスタンプ（JST、ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_rejects_empty_string() {
        // テスト項目: 空文字列の ChatId は拒否される
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = ChatId::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(DomainError::EmptyId));
    }

    #[test]
    fn test_chat_id_factory_generates_unique_ids() {
        // テスト項目: ファクトリが毎回異なる ID を採番する
        // given (前提条件):

        // when (操作):
        let id1 = ChatIdFactory::generate();
        let id2 = ChatIdFactory::generate();

        // then (期待する結果):
        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_message_id_factory_generates_unique_ids() {
        // テスト項目: MessageId のファクトリが毎回異なる ID を採番する
        // given (前提条件):

        // when (操作):
        let id1 = MessageIdFactory::generate();
        let id2 = MessageIdFactory::generate();

        // then (期待する結果):
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_clock_time_display_without_zero_padding() {
        // テスト項目: 時刻表示はゼロ埋めなしの "{hr}:{mins}" 形式
        // given (前提条件):
        let time = ClockTime::new(9, 5);

        // when (操作):
        let displayed = time.to_string();

        // then (期待する結果):
        assert_eq!(displayed, "9:5");
    }

    #[test]
    fn test_clock_time_display_two_digit_fields() {
        // テスト項目: 2桁の時・分もそのまま表示される
        // given (前提条件):
        let time = ClockTime::new(23, 59);

        // when (操作):
        let displayed = time.to_string();

        // then (期待する結果):
        assert_eq!(displayed, "23:59");
    }

    #[test]
    fn test_chat_title_accepts_empty_string() {
        // テスト項目: タイトルは無検証（空文字列も受け付ける）
        // given (前提条件):
        let title = ChatTitle::new(String::new());

        // then (期待する結果):
        assert_eq!(title.as_str(), "");
    }

    #[test]
    fn test_try_from_string_for_chat_id() {
        // テスト項目: TryFrom<String> で ChatId に変換できる
        // given (前提条件):
        let value = "room-1".to_string();

        // when (操作):
        let result = ChatId::try_from(value);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "room-1");
    }
}

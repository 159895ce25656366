//! エンティティ
//!
//! `Chat` はチャットルーム、`Message` はその中の1件の発言です。
//! メッセージログは到着順の追記専用列であり、追加後のメッセージが
//! 変更・削除されることはありません。

use super::value_object::{ChatId, ChatTitle, ClockTime, MessageId, MessageText, UserId};

/// チャットルーム
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    /// ルームの識別子（作成時に採番、以後不変）
    pub id: ChatId,
    /// 表示タイトル（変更可能）
    pub title: ChatTitle,
    /// 作成者のユーザー識別子（不変）
    pub creator_id: UserId,
    /// メッセージログ（到着順、追記専用）
    pub messages: Vec<Message>,
}

impl Chat {
    /// 空のメッセージログを持つ新しい Chat を作成
    pub fn new(id: ChatId, title: ChatTitle, creator_id: UserId) -> Self {
        Self {
            id,
            title,
            creator_id,
            messages: Vec::new(),
        }
    }

    /// タイトルを変更する
    pub fn rename(&mut self, title: ChatTitle) {
        self.title = title;
    }

    /// メッセージをログ末尾に追加する
    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}

/// チャット内の1件のメッセージ
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// メッセージの識別子（作成時に採番）
    pub id: MessageId,
    /// 本文（無検証）
    pub text: MessageText,
    /// 送信者の自己申告の識別子
    pub author: UserId,
    /// クライアント申告の時刻（時・分）
    pub time: ClockTime,
}

impl Message {
    pub fn new(id: MessageId, text: MessageText, author: UserId, time: ClockTime) -> Self {
        Self {
            id,
            text,
            author,
            time,
        }
    }
}

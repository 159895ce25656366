//! Repository 実装
//!
//! - `inmemory`: HashMap / Vec ベースのインメモリ実装
//! - 将来的に: PostgreSQL などの永続化実装

pub mod inmemory;

pub use inmemory::InMemoryChatRepository;

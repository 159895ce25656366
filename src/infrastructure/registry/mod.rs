//! Connection Registry 実装
//!
//! - `inmemory`: HashMap ベースのインメモリ実装

pub mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;

//! Chat server UI layer (HTTP + WebSocket endpoints).

mod handler;
mod server;
mod signal;
pub mod state; // UseCase 層の組み立て結果を保持するため public

pub use server::Server;

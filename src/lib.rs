//! In-memory group-chat backend library.
//!
//! Clients create chat rooms over HTTP, join them over WebSocket and
//! exchange text messages. Room state lives in process memory; every
//! mutation is fanned out to the audience it concerns (globally for
//! room lifecycle events, room-scoped for message traffic).

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;

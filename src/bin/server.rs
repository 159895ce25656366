//! Group-chat server with room-scoped and global fan-out.
//!
//! Serves the chat list over an HTTP API and delivers room events to
//! connected WebSocket clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin idobata-server
//! cargo run --bin idobata-server -- --host 0.0.0.0 --port 4000
//! ```

use std::sync::Arc;

use clap::Parser;
use idobata::{
    common::logger::setup_logger,
    infrastructure::{
        event_pusher::WebSocketEventPusher, registry::InMemoryConnectionRegistry,
        repository::InMemoryChatRepository,
    },
    ui::Server,
    usecase::{
        ConnectClientUseCase, CreateChatUseCase, DeleteChatUseCase, DisconnectClientUseCase,
        EventDispatcher, FindRoomUseCase, JoinRoomUseCase, ListChatsUseCase, PostMessageUseCase,
        UpdateChatUseCase,
    },
};

#[derive(Parser, Debug)]
#[command(name = "idobata-server")]
#[command(about = "Group-chat server with WebSocket fan-out", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "4000")]
    port: u16,

    /// Origin allowed to call the HTTP API
    #[arg(long, default_value = "http://localhost:19006")]
    cors_origin: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository / ConnectionRegistry
    // 2. EventPusher
    // 3. EventDispatcher
    // 4. UseCases
    // 5. Server

    // 1. Create Repository (in-memory chat store) and ConnectionRegistry
    let repository = Arc::new(InMemoryChatRepository::new());
    let registry = Arc::new(InMemoryConnectionRegistry::new());

    // 2. Create EventPusher (WebSocket implementation)
    let pusher = Arc::new(WebSocketEventPusher::new());

    // 3. Create EventDispatcher (resolves audiences, delegates delivery)
    let dispatcher = Arc::new(EventDispatcher::new(registry.clone(), pusher.clone()));

    // 4. Create UseCases
    let list_chats_usecase = Arc::new(ListChatsUseCase::new(repository.clone()));
    let create_chat_usecase = Arc::new(CreateChatUseCase::new(
        repository.clone(),
        dispatcher.clone(),
    ));
    let update_chat_usecase = Arc::new(UpdateChatUseCase::new(
        repository.clone(),
        dispatcher.clone(),
    ));
    let delete_chat_usecase = Arc::new(DeleteChatUseCase::new(
        repository.clone(),
        registry.clone(),
        dispatcher.clone(),
    ));
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        registry.clone(),
        pusher.clone(),
    ));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(
        registry.clone(),
        pusher.clone(),
    ));
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(registry.clone()));
    let find_room_usecase = Arc::new(FindRoomUseCase::new(
        repository.clone(),
        dispatcher.clone(),
    ));
    let post_message_usecase = Arc::new(PostMessageUseCase::new(
        repository.clone(),
        dispatcher.clone(),
    ));

    // 5. Create and run the server
    let server = Server::new(
        list_chats_usecase,
        create_chat_usecase,
        update_chat_usecase,
        delete_chat_usecase,
        connect_client_usecase,
        disconnect_client_usecase,
        join_room_usecase,
        find_room_usecase,
        post_message_usecase,
        dispatcher,
    );
    if let Err(e) = server.run(args.host, args.port, args.cors_origin).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

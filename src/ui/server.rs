//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::{
    ConnectClientUseCase, CreateChatUseCase, DeleteChatUseCase, DisconnectClientUseCase,
    EventDispatcher, FindRoomUseCase, JoinRoomUseCase, ListChatsUseCase, PostMessageUseCase,
    UpdateChatUseCase,
};

use super::{
    handler::{
        http::{create_chat, delete_chat, get_chats, health_check, update_chat},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Group-chat server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     list_chats_usecase,
///     create_chat_usecase,
///     // ...
/// );
/// server.run("127.0.0.1".to_string(), 4000, "http://localhost:19006".to_string()).await?;
/// ```
pub struct Server {
    /// ListChatsUseCase（チャット一覧取得のユースケース）
    list_chats_usecase: Arc<ListChatsUseCase>,
    /// CreateChatUseCase（チャット作成のユースケース）
    create_chat_usecase: Arc<CreateChatUseCase>,
    /// UpdateChatUseCase（チャット更新のユースケース）
    update_chat_usecase: Arc<UpdateChatUseCase>,
    /// DeleteChatUseCase（チャット削除のユースケース）
    delete_chat_usecase: Arc<DeleteChatUseCase>,
    /// ConnectClientUseCase（クライアント接続のユースケース）
    connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（クライアント切断のユースケース）
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    join_room_usecase: Arc<JoinRoomUseCase>,
    /// FindRoomUseCase（ルーム問い合わせのユースケース）
    find_room_usecase: Arc<FindRoomUseCase>,
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    post_message_usecase: Arc<PostMessageUseCase>,
    /// EventDispatcher（接続単位のエラー返信用）
    dispatcher: Arc<EventDispatcher>,
}

impl Server {
    /// Create a new Server instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        list_chats_usecase: Arc<ListChatsUseCase>,
        create_chat_usecase: Arc<CreateChatUseCase>,
        update_chat_usecase: Arc<UpdateChatUseCase>,
        delete_chat_usecase: Arc<DeleteChatUseCase>,
        connect_client_usecase: Arc<ConnectClientUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
        join_room_usecase: Arc<JoinRoomUseCase>,
        find_room_usecase: Arc<FindRoomUseCase>,
        post_message_usecase: Arc<PostMessageUseCase>,
        dispatcher: Arc<EventDispatcher>,
    ) -> Self {
        Self {
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
        }
    }

    /// Run the group-chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 4000)
    /// * `cors_origin` - The origin allowed to call the HTTP API
    ///
    /// # Errors
    ///
    /// Returns an error if the allowed origin is not a valid header value,
    /// if the server fails to bind to the specified address, or if there's
    /// an error during server execution.
    pub async fn run(
        self,
        host: String,
        port: u16,
        cors_origin: String,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            list_chats_usecase: self.list_chats_usecase,
            create_chat_usecase: self.create_chat_usecase,
            update_chat_usecase: self.update_chat_usecase,
            delete_chat_usecase: self.delete_chat_usecase,
            connect_client_usecase: self.connect_client_usecase,
            disconnect_client_usecase: self.disconnect_client_usecase,
            join_room_usecase: self.join_room_usecase,
            find_room_usecase: self.find_room_usecase,
            post_message_usecase: self.post_message_usecase,
            dispatcher: self.dispatcher,
        });

        let cors = CorsLayer::new()
            .allow_origin(cors_origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        // Define handlers
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/chats", get(get_chats).post(create_chat))
            .route(
                "/api/chats/{chat_id}",
                axum::routing::put(update_chat).delete(delete_chat),
            )
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Group-chat server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{send_message, welcome, ChatHandlers};

pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/api/chat", post(send_message))
        .route("/api/chat/welcome", get(welcome))
        .with_state(handlers)
}

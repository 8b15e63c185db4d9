//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_domain_error;
use crate::adapters::http::middleware::OptionalSession;
use crate::application::{SendChatMessageCommand, SendChatMessageHandler};
use crate::domain::assistant::CannedAssistant;
use crate::domain::foundation::Timestamp;

use super::dto::{ChatRequest, ChatResponse};

#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendChatMessageHandler>,
}

impl ChatHandlers {
    pub fn new(send_handler: Arc<SendChatMessageHandler>) -> Self {
        Self { send_handler }
    }
}

/// GET /api/chat/welcome - Greeting that opens a conversation
pub async fn welcome() -> Response {
    let response = ChatResponse {
        reply: CannedAssistant.welcome().to_string(),
        timestamp: Timestamp::now(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/chat - Send a message to the assistant
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    OptionalSession(session): OptionalSession,
    Json(req): Json<ChatRequest>,
) -> Response {
    let cmd = SendChatMessageCommand {
        session_id: session.map(|s| s.id()),
        message: req.message,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => {
            let response = ChatResponse {
                reply: result.reply.content().to_string(),
                timestamp: result.reply.timestamp(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

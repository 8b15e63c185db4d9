//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_domain_error;
use crate::adapters::http::middleware::RequireSession;
use crate::application::{SendChatMessageHandler, SessionService};

use super::dto::{SessionResponse, StartSessionRequest};

#[derive(Clone)]
pub struct SessionHandlers {
    sessions: Arc<SessionService>,
    chat: Arc<SendChatMessageHandler>,
}

impl SessionHandlers {
    pub fn new(sessions: Arc<SessionService>, chat: Arc<SendChatMessageHandler>) -> Self {
        Self { sessions, chat }
    }
}

/// POST /api/session - Start a session
pub async fn start_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<StartSessionRequest>,
) -> Response {
    match handlers.sessions.start(&req.email).await {
        Ok(session) => {
            (StatusCode::CREATED, Json(SessionResponse::from(session))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/session - Current session
pub async fn current_session(RequireSession(session): RequireSession) -> Response {
    (StatusCode::OK, Json(SessionResponse::from(session))).into_response()
}

/// DELETE /api/session - End the current session
pub async fn end_session(
    State(handlers): State<SessionHandlers>,
    RequireSession(session): RequireSession,
) -> Response {
    match handlers.sessions.end(session.id()).await {
        Ok(_) => {
            handlers.chat.forget(session.id()).await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

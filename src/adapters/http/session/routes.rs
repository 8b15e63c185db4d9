//! HTTP routes for session endpoints.

use axum::{routing::post, Router};

use super::handlers::{current_session, end_session, start_session, SessionHandlers};

pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route(
            "/api/session",
            post(start_session).get(current_session).delete(end_session),
        )
        .with_state(handlers)
}

//! Session middleware and extractors for axum.
//!
//! - `session_middleware` - resolves a `Bearer <session id>` header to the
//!   stored `UserSession` and injects it into request extensions
//! - `RequireSession` - extractor that rejects requests without a session
//! - `OptionalSession` - extractor for routes that work either way
//!
//! ```text
//! Request → session_middleware → injects UserSession into extensions
//!                                       ↓
//!                               Handler → RequireSession reads from extensions
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, ErrorResponse};
use crate::application::SessionService;
use crate::domain::foundation::SessionId;
use crate::domain::session::UserSession;

/// Session middleware state.
pub type SessionState = Arc<SessionService>;

/// Resolves the bearer session token.
///
/// A missing header or an unknown session continues without a session, so
/// handlers decide whether one is required. A token that is not a session
/// id is rejected with 401.
pub async fn session_middleware(
    State(sessions): State<SessionState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim);

    let Some(token) = token else {
        return next.run(request).await;
    };

    let session_id = match token.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            tracing::debug!("malformed session token");
            return SessionRejection::InvalidToken.into_response();
        }
    };

    match sessions.load(session_id).await {
        Ok(Some(session)) => {
            request.extensions_mut().insert(session);
        }
        Ok(None) => {
            tracing::debug!(session_id = %session_id, "unknown session token");
        }
        Err(e) => return handle_domain_error(e),
    }

    next.run(request).await
}

/// Extractor that requires a signed-in session.
#[derive(Debug, Clone)]
pub struct RequireSession(pub UserSession);

#[async_trait]
impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserSession>()
            .cloned()
            .map(RequireSession)
            .ok_or(SessionRejection::Unauthenticated)
    }
}

/// Extractor for an optional session.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<UserSession>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalSession(parts.extensions.get::<UserSession>().cloned()))
    }
}

/// Rejection type for session failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRejection {
    /// No valid session accompanied the request.
    Unauthenticated,
    /// The bearer token is not a session id.
    InvalidToken,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        let message = match self {
            SessionRejection::Unauthenticated => "Authentication required",
            SessionRejection::InvalidToken => "Invalid session token",
        };
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized(message)),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Email;
    use axum::http::Request as HttpRequest;

    fn test_session() -> UserSession {
        UserSession::start(Email::new("test@example.com").unwrap())
    }

    #[tokio::test]
    async fn require_session_extracts_from_extensions() {
        let mut request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        let session = test_session();
        request.extensions_mut().insert(session.clone());
        let (mut parts, _body) = request.into_parts();

        let RequireSession(found) = RequireSession::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn require_session_fails_without_session() {
        let request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result = RequireSession::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(SessionRejection::Unauthenticated)));
    }

    #[tokio::test]
    async fn optional_session_is_none_when_absent() {
        let request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let OptionalSession(found) = OptionalSession::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn rejections_return_401() {
        assert_eq!(
            SessionRejection::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            SessionRejection::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn require_session_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequireSession>();
        assert_send_sync::<SessionState>();
    }
}

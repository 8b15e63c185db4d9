//! HTTP DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::RiskProfile;
use crate::domain::foundation::Timestamp;
use crate::domain::session::UserSession;

/// Request to start a session.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    pub email: String,
}

/// Session view. `token` is presented as `Authorization: Bearer <token>`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub risk_profile: Option<RiskProfile>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<UserSession> for SessionResponse {
    fn from(session: UserSession) -> Self {
        let id = session.id().to_string();
        Self {
            token: id.clone(),
            session_id: id,
            user_id: session.user_id().to_string(),
            email: session.email().to_string(),
            risk_profile: session.risk_profile(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

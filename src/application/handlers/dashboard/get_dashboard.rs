//! GetDashboardHandler - Query handler for the signed-in user's dashboard.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::portfolio::Dashboard;

use super::super::session::SessionService;

/// Query for the dashboard of a session's latest profile.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub session_id: SessionId,
}

pub struct GetDashboardHandler {
    sessions: Arc<SessionService>,
}

impl GetDashboardHandler {
    pub fn new(sessions: Arc<SessionService>) -> Self {
        Self { sessions }
    }

    /// # Errors
    ///
    /// - `SessionNotFound` if the session does not exist
    /// - `AssessmentRequired` if no profile has been recorded yet
    pub async fn handle(&self, query: GetDashboardQuery) -> Result<Dashboard, DomainError> {
        let session = self.sessions.require(query.session_id).await?;
        let profile = session.risk_profile().ok_or_else(|| {
            DomainError::new(
                ErrorCode::AssessmentRequired,
                "Complete the risk assessment to see your dashboard",
            )
        })?;
        Ok(Dashboard::for_profile(profile))
    }
}

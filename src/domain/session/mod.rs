//! Session module - The signed-in user's context.
//!
//! A `UserSession` is an explicit value passed to whoever needs the current
//! user; it is persisted through the `KeyValueStore` port rather than held
//! in process-wide state.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::RiskProfile;
use crate::domain::foundation::{Email, SessionId, Timestamp, UserId};

/// Signed-in user and their latest risk profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    id: SessionId,
    user_id: UserId,
    email: Email,
    risk_profile: Option<RiskProfile>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl UserSession {
    /// Opens a session for a freshly generated user id.
    pub fn start(email: Email) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            user_id: UserId::generate(),
            email,
            risk_profile: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn risk_profile(&self) -> Option<RiskProfile> {
        self.risk_profile
    }

    pub fn has_completed_assessment(&self) -> bool {
        self.risk_profile.is_some()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Records the outcome of an assessment, replacing any earlier profile.
    pub fn record_risk_profile(&mut self, profile: RiskProfile) {
        self.risk_profile = Some(profile);
        self.updated_at = Timestamp::now();
    }

    /// Storage key for this session.
    pub fn storage_key(&self) -> String {
        Self::key_for(self.id)
    }

    pub fn key_for(id: SessionId) -> String {
        format!("session:{}", id)
    }
}

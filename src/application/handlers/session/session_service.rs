//! SessionService - Lifecycle of the signed-in user's session record.
//!
//! Sessions are stored as JSON under `session:{id}` through the
//! `KeyValueStore` port. The service is shared via `Arc` and passed to
//! every handler that needs the current user.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::assessment::RiskProfile;
use crate::domain::foundation::{DomainError, Email, ErrorCode, SessionId};
use crate::domain::session::UserSession;
use crate::ports::KeyValueStore;

/// Updates and deletes go through `mutations` so an update can never
/// write back a record that `end` removed in the meantime.
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    mutations: Mutex<()>,
}

impl SessionService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            mutations: Mutex::new(()),
        }
    }

    /// Opens and persists a session for `email`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the email is empty or malformed
    /// - `StorageError` on persistence failure
    pub async fn start(&self, email: &str) -> Result<UserSession, DomainError> {
        let email = Email::new(email)?;
        let session = UserSession::start(email);
        self.save(&session).await?;

        tracing::debug!(session_id = %session.id(), user_id = %session.user_id(), "session started");
        Ok(session)
    }

    /// Loads a session, returning `None` if it does not exist.
    pub async fn load(&self, id: SessionId) -> Result<Option<UserSession>, DomainError> {
        let Some(json) = self.store.get(&UserSession::key_for(id)).await? else {
            return Ok(None);
        };

        serde_json::from_str(&json).map(Some).map_err(|e| {
            tracing::error!(session_id = %id, "corrupt session record: {}", e);
            DomainError::new(ErrorCode::StorageError, "Stored session could not be read")
                .with_detail("session_id", id.to_string())
        })
    }

    /// Loads a session that must exist.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if there is no such session
    pub async fn require(&self, id: SessionId) -> Result<UserSession, DomainError> {
        self.load(id).await?.ok_or_else(|| session_not_found(id))
    }

    /// Records a risk profile on an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if there is no such session
    /// - `StorageError` on persistence failure
    pub async fn update_risk_profile(
        &self,
        id: SessionId,
        profile: RiskProfile,
    ) -> Result<UserSession, DomainError> {
        let _guard = self.mutations.lock().await;
        let mut session = self.require(id).await?;
        session.record_risk_profile(profile);
        self.save(&session).await?;
        Ok(session)
    }

    /// Removes a session. Returns whether it existed.
    pub async fn end(&self, id: SessionId) -> Result<bool, DomainError> {
        let _guard = self.mutations.lock().await;
        let removed = self.store.delete(&UserSession::key_for(id)).await?;
        if removed {
            tracing::debug!(session_id = %id, "session ended");
        }
        Ok(removed)
    }

    async fn save(&self, session: &UserSession) -> Result<(), DomainError> {
        let json = serde_json::to_string(session).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to serialize session: {}", e))
        })?;
        self.store.put(&session.storage_key(), &json).await?;
        Ok(())
    }
}

fn session_not_found(id: SessionId) -> DomainError {
    DomainError::new(ErrorCode::SessionNotFound, "Session not found")
        .with_detail("session_id", id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::ports::StorageError;
    use async_trait::async_trait;

    fn service() -> (SessionService, InMemoryKeyValueStore) {
        let store = InMemoryKeyValueStore::new();
        (SessionService::new(Arc::new(store.clone())), store)
    }

    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io("disk unavailable".to_string()))
        }

        async fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("disk unavailable".to_string()))
        }

        async fn delete(&self, _key: &str) -> Result<bool, StorageError> {
            Err(StorageError::Io("disk unavailable".to_string()))
        }
    }

    /// Delays reads so a concurrent `end` lands between read and write.
    struct SlowReadStore {
        inner: InMemoryKeyValueStore,
    }

    #[async_trait]
    impl KeyValueStore for SlowReadStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            self.inner.get(key).await
        }

        async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.put(key, value).await
        }

        async fn delete(&self, key: &str) -> Result<bool, StorageError> {
            self.inner.delete(key).await
        }
    }

    #[tokio::test]
    async fn start_persists_session() {
        let (service, store) = service();
        let session = service.start("Investor@Example.com").await.unwrap();

        assert_eq!(session.email().as_str(), "investor@example.com");
        assert!(store.get(&session.storage_key()).await.unwrap().is_some());
        assert_eq!(service.load(session.id()).await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn start_rejects_invalid_email() {
        let (service, store) = service();

        let err = service.start("not-an-email").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);

        let err = service.start("   ").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_risk_profile_persists_and_returns_session() {
        let (service, _) = service();
        let session = service.start("a@example.com").await.unwrap();

        let updated = service
            .update_risk_profile(session.id(), RiskProfile::Low)
            .await
            .unwrap();
        assert_eq!(updated.risk_profile(), Some(RiskProfile::Low));

        let reloaded = service.require(session.id()).await.unwrap();
        assert_eq!(reloaded.risk_profile(), Some(RiskProfile::Low));
    }

    #[tokio::test]
    async fn update_of_missing_session_is_not_found() {
        let (service, store) = service();
        let err = service
            .update_risk_profile(SessionId::new(), RiskProfile::High)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::SessionNotFound);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn end_is_idempotent() {
        let (service, _) = service();
        let session = service.start("a@example.com").await.unwrap();

        assert!(service.end(session.id()).await.unwrap());
        assert!(!service.end(session.id()).await.unwrap());
        assert_eq!(service.load(session.id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn end_during_profile_update_leaves_session_ended() {
        let inner = InMemoryKeyValueStore::new();
        let service = Arc::new(SessionService::new(Arc::new(SlowReadStore {
            inner: inner.clone(),
        })));
        let session = service.start("a@example.com").await.unwrap();
        let id = session.id();

        let updating = {
            let service = service.clone();
            tokio::spawn(async move { service.update_risk_profile(id, RiskProfile::High).await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        let ended = service.end(id).await.unwrap();
        let updated = updating.await.unwrap();

        assert!(ended);
        assert!(updated.is_ok());
        assert!(inner.get(&UserSession::key_for(id)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_after_end_is_not_found() {
        let (service, store) = service();
        let session = service.start("a@example.com").await.unwrap();
        service.end(session.id()).await.unwrap();

        let err = service
            .update_risk_profile(session.id(), RiskProfile::Low)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn corrupt_record_is_a_storage_error() {
        let (service, store) = service();
        let id = SessionId::new();
        store.put(&UserSession::key_for(id), "not json").await.unwrap();

        let err = service.load(id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn store_failures_surface_as_storage_errors() {
        let service = SessionService::new(Arc::new(FailingStore));
        let err = service.start("a@example.com").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}

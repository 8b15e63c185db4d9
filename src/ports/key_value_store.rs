//! Key-value store port - Opaque string storage for small JSON records.
//!
//! Keys are `:`-separated segments (for example `session:<uuid>`). Each
//! segment is non-empty and limited to ASCII alphanumerics, `-` and `_`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during key-value operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Splits a key into its segments, rejecting malformed keys.
pub fn key_segments(key: &str) -> Result<Vec<&str>, StorageError> {
    let segments: Vec<&str> = key.split(':').collect();
    let valid = segments.iter().all(|s| {
        !s.is_empty()
            && s
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    });
    if valid {
        Ok(segments)
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Port for persisting string values by key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` if nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Returns whether a value was present.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn KeyValueStore) {}
    }

    #[test]
    fn well_formed_keys_split_into_segments() {
        assert_eq!(
            key_segments("session:3f1c-ab_9").unwrap(),
            vec!["session", "3f1c-ab_9"]
        );
    }

    #[test]
    fn malformed_keys_are_rejected() {
        for key in ["", "session:", ":id", "session:../etc", "a b", "session::id"] {
            assert_eq!(
                key_segments(key),
                Err(StorageError::InvalidKey(key.to_string())),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn storage_error_maps_to_storage_code() {
        let err: DomainError = StorageError::Io("disk full".to_string()).into();
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(err.message().contains("disk full"));
    }
}

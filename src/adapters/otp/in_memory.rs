//! In-memory OTP repository.
//!
//! Records live in a `Mutex<Vec<_>>`; nothing is ever pruned, so this is
//! for development and tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, Email, ErrorCode, OtpId};
use crate::domain::otp::OtpRecord;
use crate::ports::OtpRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryOtpRepository {
    records: Arc<Mutex<Vec<OtpRecord>>>,
}

impl InMemoryOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepository {
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Vec<OtpRecord>, DomainError> {
        let records = self.records.lock().await;
        Ok(records.iter().filter(|r| &r.email == email).cloned().collect())
    }

    async fn mark_verified(&self, id: OtpId) -> Result<bool, DomainError> {
        let mut records = self.records.lock().await;
        let record = records.iter_mut().find(|r| r.id == id).ok_or_else(|| {
            DomainError::new(ErrorCode::NotFound, "OTP record not found")
                .with_detail("otp_id", id.to_string())
        })?;

        if record.verified {
            return Ok(false);
        }
        record.verified = true;
        Ok(true)
    }
}

//! IssueOtpHandler - Issues a one-time passcode for an email address.
//!
//! Delivering the code is the caller's concern; only its digest is stored.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Email, OtpId, Timestamp};
use crate::domain::otp::{OtpCode, OtpRecord};
use crate::ports::OtpRepository;

#[derive(Debug, Clone)]
pub struct IssueOtpCommand {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct IssueOtpResult {
    pub otp_id: OtpId,
    pub email: Email,
    pub code: OtpCode,
    pub expires_at: Timestamp,
}

pub struct IssueOtpHandler {
    repository: Arc<dyn OtpRepository>,
    ttl_secs: u64,
}

impl IssueOtpHandler {
    pub fn new(repository: Arc<dyn OtpRepository>, ttl_secs: u64) -> Self {
        Self {
            repository,
            ttl_secs,
        }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the email is empty or malformed
    pub async fn handle(&self, cmd: IssueOtpCommand) -> Result<IssueOtpResult, DomainError> {
        let email = Email::new(&cmd.email)?;
        let code = OtpCode::generate();
        let record = OtpRecord::issue(email.clone(), &code, Timestamp::now(), self.ttl_secs);

        self.repository.insert(&record).await?;
        tracing::debug!(otp_id = %record.id, email = %email, "otp issued");

        Ok(IssueOtpResult {
            otp_id: record.id,
            email,
            code,
            expires_at: record.expires_at,
        })
    }
}

//! VerifyOtpHandler - Checks a passcode and consumes it.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Email, ErrorCode, Timestamp, ValidationError};
use crate::domain::otp::{select_verifiable, OtpCode, OtpError};
use crate::ports::OtpRepository;

#[derive(Debug, Clone)]
pub struct VerifyOtpCommand {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct VerifyOtpResult {
    pub email: Email,
    pub verified_at: Timestamp,
}

pub struct VerifyOtpHandler {
    repository: Arc<dyn OtpRepository>,
}

impl VerifyOtpHandler {
    pub fn new(repository: Arc<dyn OtpRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the email or code is empty
    /// - `InvalidOrExpiredOtp` if no unused, unexpired record matches
    pub async fn handle(&self, cmd: VerifyOtpCommand) -> Result<VerifyOtpResult, DomainError> {
        let email = Email::new(&cmd.email)?;
        let code = match OtpCode::parse(&cmd.code) {
            Ok(code) => code,
            Err(err @ ValidationError::EmptyField { .. }) => return Err(err.into()),
            Err(_) => return Err(invalid_or_expired()),
        };

        let now = Timestamp::now();
        let records = self.repository.find_by_email(&email).await?;
        let record = select_verifiable(&records, &email, &code, now).ok_or_else(|| {
            tracing::debug!(email = %email, "otp rejected");
            invalid_or_expired()
        })?;

        // Another request may have claimed the same record since the read
        if !self.repository.mark_verified(record.id).await? {
            return Err(invalid_or_expired());
        }

        tracing::debug!(otp_id = %record.id, email = %email, "otp verified");
        Ok(VerifyOtpResult {
            email,
            verified_at: now,
        })
    }
}

fn invalid_or_expired() -> DomainError {
    DomainError::new(ErrorCode::InvalidOrExpiredOtp, OtpError::InvalidOrExpired.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::otp::InMemoryOtpRepository;
    use crate::domain::otp::OtpRecord;

    const EMAIL: &str = "new.user@example.com";

    async fn seeded(code: &str, issued_secs_ago: u64, ttl: u64) -> InMemoryOtpRepository {
        let repo = InMemoryOtpRepository::new();
        let record = OtpRecord::issue(
            Email::new(EMAIL).unwrap(),
            &OtpCode::parse(code).unwrap(),
            Timestamp::now().minus_secs(issued_secs_ago),
            ttl,
        );
        repo.insert(&record).await.unwrap();
        repo
    }

    fn command(email: &str, code: &str) -> VerifyOtpCommand {
        VerifyOtpCommand {
            email: email.to_string(),
            code: code.to_string(),
        }
    }

    #[tokio::test]
    async fn correct_code_verifies_once() {
        let repo = seeded("482913", 0, 600).await;
        let handler = VerifyOtpHandler::new(Arc::new(repo));

        let result = handler.handle(command(EMAIL, "482913")).await.unwrap();
        assert_eq!(result.email.as_str(), EMAIL);

        let err = handler.handle(command(EMAIL, "482913")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidOrExpiredOtp);
    }

    #[tokio::test]
    async fn wrong_code_is_rejected() {
        let handler = VerifyOtpHandler::new(Arc::new(seeded("482913", 0, 600).await));
        let err = handler.handle(command(EMAIL, "000000")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidOrExpiredOtp);
    }

    #[tokio::test]
    async fn expired_code_is_rejected() {
        let handler = VerifyOtpHandler::new(Arc::new(seeded("482913", 601, 600).await));
        let err = handler.handle(command(EMAIL, "482913")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidOrExpiredOtp);
    }

    #[tokio::test]
    async fn code_for_other_email_is_rejected() {
        let handler = VerifyOtpHandler::new(Arc::new(seeded("482913", 0, 600).await));
        let err = handler
            .handle(command("other@example.com", "482913"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidOrExpiredOtp);
    }

    #[tokio::test]
    async fn malformed_code_is_rejected_as_invalid() {
        let handler = VerifyOtpHandler::new(Arc::new(seeded("482913", 0, 600).await));
        let err = handler.handle(command(EMAIL, "48-913")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidOrExpiredOtp);
    }

    #[tokio::test]
    async fn empty_inputs_are_validation_errors() {
        let handler = VerifyOtpHandler::new(Arc::new(InMemoryOtpRepository::new()));

        let err = handler.handle(command("", "123456")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);

        let err = handler.handle(command(EMAIL, "")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}

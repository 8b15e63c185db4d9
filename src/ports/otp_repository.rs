//! OTP repository port.
//!
//! Stores issued passcode records. Verification reads candidates by email
//! and then claims one with `mark_verified`, which must be atomic so a code
//! cannot be consumed twice.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Email, OtpId};
use crate::domain::otp::OtpRecord;

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Save a newly issued record.
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError>;

    /// All records issued to `email`, in any order.
    async fn find_by_email(&self, email: &Email) -> Result<Vec<OtpRecord>, DomainError>;

    /// Flip a record to verified.
    ///
    /// Returns `false` if it was already verified.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record has this id
    async fn mark_verified(&self, id: OtpId) -> Result<bool, DomainError>;
}

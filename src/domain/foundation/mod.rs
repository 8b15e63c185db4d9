//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the Savvy Advisor domain.

mod email;
mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use email::Email;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MessageId, OtpId, SessionId, UserId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;

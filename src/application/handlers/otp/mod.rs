//! One-time passcode handlers.

mod issue_otp;
mod verify_otp;

pub use issue_otp::{IssueOtpCommand, IssueOtpHandler, IssueOtpResult};
pub use verify_otp::{VerifyOtpCommand, VerifyOtpHandler, VerifyOtpResult};

//! HTTP adapter for one-time passcode endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{IssueOtpRequest, IssueOtpResponse, VerifyOtpRequest, VerifyOtpResponse};
pub use handlers::OtpHandlers;
pub use routes::otp_routes;

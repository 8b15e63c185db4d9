//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod assistant;
pub mod dashboard;
pub mod otp;
pub mod session;

pub use assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult};
pub use assistant::{SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult};
pub use dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use otp::{
    IssueOtpCommand, IssueOtpHandler, IssueOtpResult, VerifyOtpCommand, VerifyOtpHandler,
    VerifyOtpResult,
};
pub use session::SessionService;

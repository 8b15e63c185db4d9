//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    GetDashboardHandler, GetDashboardQuery, IssueOtpCommand, IssueOtpHandler, IssueOtpResult,
    SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult, SessionService,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult, VerifyOtpCommand,
    VerifyOtpHandler, VerifyOtpResult,
};

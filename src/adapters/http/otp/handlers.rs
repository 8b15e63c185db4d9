//! HTTP handlers for one-time passcode endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_domain_error;
use crate::application::{IssueOtpCommand, IssueOtpHandler, VerifyOtpCommand, VerifyOtpHandler};

use super::dto::{IssueOtpRequest, IssueOtpResponse, VerifyOtpRequest, VerifyOtpResponse};

#[derive(Clone)]
pub struct OtpHandlers {
    issue_handler: Arc<IssueOtpHandler>,
    verify_handler: Arc<VerifyOtpHandler>,
    expose_code: bool,
}

impl OtpHandlers {
    pub fn new(
        issue_handler: Arc<IssueOtpHandler>,
        verify_handler: Arc<VerifyOtpHandler>,
        expose_code: bool,
    ) -> Self {
        Self {
            issue_handler,
            verify_handler,
            expose_code,
        }
    }
}

/// POST /api/otp - Issue a passcode
pub async fn issue_otp(
    State(handlers): State<OtpHandlers>,
    Json(req): Json<IssueOtpRequest>,
) -> Response {
    let cmd = IssueOtpCommand { email: req.email };

    match handlers.issue_handler.handle(cmd).await {
        Ok(result) => {
            let response = IssueOtpResponse {
                message: "OTP sent successfully".to_string(),
                expires_at: result.expires_at,
                code: handlers
                    .expose_code
                    .then(|| result.code.as_str().to_string()),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/otp/verify - Verify and consume a passcode
pub async fn verify_otp(
    State(handlers): State<OtpHandlers>,
    Json(req): Json<VerifyOtpRequest>,
) -> Response {
    let cmd = VerifyOtpCommand {
        email: req.email,
        code: req.code,
    };

    match handlers.verify_handler.handle(cmd).await {
        Ok(result) => {
            let response = VerifyOtpResponse {
                message: "OTP verified successfully".to_string(),
                email: result.email.to_string(),
                verified_at: result.verified_at,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

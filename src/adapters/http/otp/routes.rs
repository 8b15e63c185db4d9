//! HTTP routes for one-time passcode endpoints.

use axum::{routing::post, Router};

use super::handlers::{issue_otp, verify_otp, OtpHandlers};

pub fn otp_routes(handlers: OtpHandlers) -> Router {
    Router::new()
        .route("/api/otp", post(issue_otp))
        .route("/api/otp/verify", post(verify_otp))
        .with_state(handlers)
}

//! HTTP DTOs for one-time passcode endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Deserialize)]
pub struct IssueOtpRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueOtpResponse {
    pub message: String,
    pub expires_at: Timestamp,
    /// Present only when the service is configured to expose codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "otp")]
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpResponse {
    pub message: String,
    pub email: String,
    pub verified_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_accepts_otp_alias() {
        let req: VerifyOtpRequest =
            serde_json::from_str(r#"{"email": "a@example.com", "otp": "123456"}"#).unwrap();
        assert_eq!(req.code, "123456");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let req: VerifyOtpRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
        assert!(req.code.is_empty());
    }

    #[test]
    fn hidden_code_is_omitted() {
        let json = serde_json::to_value(IssueOtpResponse {
            message: "OTP sent".to_string(),
            expires_at: Timestamp::now(),
            code: None,
        })
        .unwrap();
        assert!(json.get("code").is_none());
    }
}

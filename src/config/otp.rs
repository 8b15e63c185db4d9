//! One-time passcode configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::otp::DEFAULT_OTP_TTL_SECS;

#[derive(Debug, Clone, Deserialize)]
pub struct OtpConfig {
    /// Seconds a code stays valid
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Return the clear code in the issue response. Development only; there
    /// is no delivery channel in this service.
    #[serde(default)]
    pub expose_code: bool,
}

impl OtpConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(60..=86_400).contains(&self.ttl_secs) {
            return Err(ValidationError::InvalidOtpTtl(self.ttl_secs));
        }
        Ok(())
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            expose_code: false,
        }
    }
}

fn default_ttl_secs() -> u64 {
    DEFAULT_OTP_TTL_SECS
}

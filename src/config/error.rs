//! Configuration errors.
//!
//! `ConfigError` covers reading sources; `ValidationError` covers values that
//! parsed but make no sense for this service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    ValidationFailed(#[from] ValidationError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("server.port must be non-zero")]
    InvalidPort,

    #[error("server.host '{0}' is not an IP address")]
    InvalidHost(String),

    #[error("server.request_timeout_secs must be 1-300, got {0}")]
    InvalidTimeout(u64),

    #[error("otp.ttl_secs must be 60-86400, got {0}")]
    InvalidOtpTtl(u64),

    #[error("assistant.max_history must be at most 1000, got {0}")]
    InvalidChatHistory(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_key() {
        assert_eq!(
            ValidationError::InvalidOtpTtl(5).to_string(),
            "otp.ttl_secs must be 60-86400, got 5"
        );
        assert_eq!(
            ValidationError::MissingRequired("storage.path").to_string(),
            "storage.path must be set"
        );
    }

    #[test]
    fn validation_error_wraps_into_config_error() {
        let err: ConfigError = ValidationError::InvalidPort.into();
        assert!(err.to_string().starts_with("invalid configuration:"));
    }
}

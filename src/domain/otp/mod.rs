//! One-time passcodes for email verification.
//!
//! Codes are six digits, short-lived and single-use. Only a SHA-256 digest of
//! the code is ever stored; comparison is constant-time.
//!
//! # Domain Invariants
//!
//! 1. A code is in the range 100000..=999999
//! 2. A record verifies at most once
//! 3. A record never verifies at or after its expiry instant
//! 4. When several records match, the newest one is consumed

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::foundation::{Email, OtpId, Timestamp, ValidationError};

/// Default validity window (10 minutes).
pub const DEFAULT_OTP_TTL_SECS: u64 = 600;

const CODE_MIN: u32 = 100_000;
const CODE_SPAN: u32 = 900_000;

/// Errors raised by passcode verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("Invalid or expired OTP")]
    InvalidOrExpired,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A clear-text six digit passcode. Handed to the delivery channel, never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Generates a random code.
    pub fn generate() -> Self {
        let entropy = Uuid::new_v4().as_u128();
        let value = CODE_MIN + (entropy % u128::from(CODE_SPAN)) as u32;
        Self(value.to_string())
    }

    /// Parses user input, which must be exactly six ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("otp"));
        }
        if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format("otp", "must be six digits"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digest(&self) -> [u8; 32] {
        Sha256::digest(self.0.as_bytes()).into()
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(******)")
    }
}

/// A stored passcode record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    pub id: OtpId,
    pub email: Email,
    code_digest: [u8; 32],
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub verified: bool,
}

impl OtpRecord {
    /// Issues a record for a new code valid for `ttl_secs` from `now`.
    pub fn issue(email: Email, code: &OtpCode, now: Timestamp, ttl_secs: u64) -> Self {
        Self {
            id: OtpId::new(),
            email,
            code_digest: code.digest(),
            created_at: now,
            expires_at: now.plus_secs(ttl_secs),
            verified: false,
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        !now.is_before(&self.expires_at)
    }

    pub fn matches(&self, code: &OtpCode) -> bool {
        self.code_digest[..].ct_eq(&code.digest()[..]).into()
    }

    /// Whether this record would accept `code` at `now`.
    pub fn accepts(&self, code: &OtpCode, now: Timestamp) -> bool {
        !self.verified && !self.is_expired(now) && self.matches(code)
    }
}

/// Picks the newest record for `email` that accepts `code` at `now`.
pub fn select_verifiable<'a>(
    records: impl IntoIterator<Item = &'a OtpRecord>,
    email: &Email,
    code: &OtpCode,
    now: Timestamp,
) -> Option<&'a OtpRecord> {
    records
        .into_iter()
        .filter(|r| &r.email == email && r.accepts(code, now))
        .max_by_key(|r| r.created_at)
}

//! UTC instants used for record times and passcode expiry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Offsets are capped at roughly a century so arithmetic cannot overflow.
const MAX_OFFSET_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// A UTC instant, serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self < other
    }

    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0 + offset(secs))
    }

    pub fn minus_secs(&self, secs: u64) -> Self {
        Self(self.0 - offset(secs))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

fn offset(secs: u64) -> Duration {
    Duration::seconds(secs.min(MAX_OFFSET_SECS) as i64)
}

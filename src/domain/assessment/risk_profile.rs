//! Risk profile classification for an investor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Investor risk appetite, ordered from capital preservation to maximum growth.
///
/// The declaration order is significant: it drives both the classification
/// thresholds and the ordering used by the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RiskProfile {
    /// Capital preservation above all else
    No,
    /// Stability first, minimal volatility
    Low,
    /// Balance between growth and stability
    Medium,
    /// Growth first, significant volatility accepted
    High,
    /// Maximum growth, extreme volatility accepted
    VeryHigh,
}

impl RiskProfile {
    /// Every profile, in ascending order of risk appetite.
    pub const ALL: [RiskProfile; 5] = [
        RiskProfile::No,
        RiskProfile::Low,
        RiskProfile::Medium,
        RiskProfile::High,
        RiskProfile::VeryHigh,
    ];

    /// Width of each bucket on the 0-100 score scale.
    pub const BUCKET_WIDTH_PCT: f64 = 20.0;

    /// Determine the profile from a score expressed as a percentage of the
    /// maximum possible average weight.
    /// - No: [0, 20)
    /// - Low: [20, 40)
    /// - Medium: [40, 60)
    /// - High: [60, 80)
    /// - VeryHigh: [80, 100]
    pub fn from_score_pct(pct: f64) -> Self {
        let mut upper = Self::BUCKET_WIDTH_PCT;
        for profile in Self::ALL {
            if pct < upper {
                return profile;
            }
            upper += Self::BUCKET_WIDTH_PCT;
        }
        Self::VeryHigh
    }

    /// Zero-based position in [`RiskProfile::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Self::No => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
        }
    }

    /// Wire identifier (`no`, `low`, `medium`, `high`, `very-high`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }

    /// Human-readable badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::No => "No Risk",
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }
}

impl Default for RiskProfile {
    fn default() -> Self {
        Self::No
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskProfile::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "risk_profile",
                    format!("unknown risk profile '{}'", s),
                )
            })
    }
}

//! Narrative description of each risk profile.

use serde::Serialize;

use crate::domain::assessment::RiskProfile;

/// Static description shown alongside a risk profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileDescription {
    pub title: &'static str,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub time_horizon: &'static str,
}

static NO_RISK: ProfileDescription = ProfileDescription {
    title: "No Risk",
    description: "You prioritize capital preservation above all else and are not comfortable with any investment risk.",
    characteristics: &[
        "Focus on preserving capital",
        "Prefer guaranteed returns",
        "Highly concerned about any potential losses",
        "Prioritize liquidity and safety",
    ],
    time_horizon: "Less than 1 year",
};

static LOW_RISK: ProfileDescription = ProfileDescription {
    title: "Low Risk",
    description: "You prefer stable investments with minimal volatility, accepting lower returns for greater safety.",
    characteristics: &[
        "Willing to accept minimal volatility",
        "Emphasis on capital preservation with some income",
        "Limited tolerance for losses",
        "Prefer mostly conservative investments",
    ],
    time_horizon: "1-3 years",
};

static MEDIUM_RISK: ProfileDescription = ProfileDescription {
    title: "Medium Risk",
    description: "You seek a balance between growth and stability, willing to accept moderate fluctuations for better returns.",
    characteristics: &[
        "Balance between growth and safety",
        "Comfortable with some market fluctuations",
        "Moderate tolerance for losses",
        "Diversified approach to investing",
    ],
    time_horizon: "3-7 years",
};

static HIGH_RISK: ProfileDescription = ProfileDescription {
    title: "High Risk",
    description: "You prioritize growth and are comfortable with significant volatility to achieve higher long-term returns.",
    characteristics: &[
        "Strong focus on capital growth",
        "Comfortable with significant market fluctuations",
        "Higher tolerance for temporary losses",
        "Willing to take calculated risks for better returns",
    ],
    time_horizon: "7-10 years",
};

static VERY_HIGH_RISK: ProfileDescription = ProfileDescription {
    title: "Very High Risk",
    description: "You seek maximum growth potential and can tolerate extreme market volatility and significant temporary losses.",
    characteristics: &[
        "Maximum growth is the primary objective",
        "Very comfortable with market volatility",
        "High tolerance for significant temporary losses",
        "Willing to invest in speculative opportunities",
    ],
    time_horizon: "10+ years",
};

/// Description for a profile.
pub fn describe(profile: RiskProfile) -> &'static ProfileDescription {
    match profile {
        RiskProfile::No => &NO_RISK,
        RiskProfile::Low => &LOW_RISK,
        RiskProfile::Medium => &MEDIUM_RISK,
        RiskProfile::High => &HIGH_RISK,
        RiskProfile::VeryHigh => &VERY_HIGH_RISK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_matches_profile_label() {
        for profile in RiskProfile::ALL {
            assert_eq!(describe(profile).title, profile.label());
        }
    }

    #[test]
    fn every_profile_lists_four_characteristics() {
        for profile in RiskProfile::ALL {
            assert_eq!(describe(profile).characteristics.len(), 4);
        }
    }

    #[test]
    fn time_horizons_lengthen_with_risk() {
        assert_eq!(describe(RiskProfile::No).time_horizon, "Less than 1 year");
        assert_eq!(describe(RiskProfile::Medium).time_horizon, "3-7 years");
        assert_eq!(describe(RiskProfile::VeryHigh).time_horizon, "10+ years");
    }
}

//! Portfolio module - Profile descriptions, model allocations and the dashboard view.
//!
//! All lookups are exhaustive matches over [`RiskProfile`], so adding a
//! profile fails to compile until every table covers it.

mod description;
mod meter;
mod recommendation;

pub use description::{describe, ProfileDescription};
pub use meter::RiskMeter;
pub use recommendation::{recommend, Allocation, InvestmentDescriptor, RecommendationSet};

use serde::Serialize;

use crate::domain::assessment::RiskProfile;

/// Everything the dashboard renders for one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub risk_profile: RiskProfile,
    pub meter: RiskMeter,
    pub description: &'static ProfileDescription,
    pub recommendations: &'static RecommendationSet,
}

impl Dashboard {
    pub fn for_profile(profile: RiskProfile) -> Self {
        Self {
            risk_profile: profile,
            meter: RiskMeter::for_profile(profile),
            description: describe(profile),
            recommendations: recommend(profile),
        }
    }
}

//! Conservative-to-aggressive gauge for a risk profile.

use serde::Serialize;

use crate::domain::assessment::RiskProfile;

/// Distance between adjacent profile markers on the gauge.
const MARKER_STEP_PCT: u8 = 25;
/// Extra fill so the lowest profile still shows one segment.
const FILL_OFFSET_PCT: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskMeter {
    pub profile: RiskProfile,
    pub label: &'static str,
    /// Marker offset along the gauge: 0, 25, 50, 75 or 100.
    pub position_pct: u8,
    /// Width of the filled bar; may exceed 100 for the top profile.
    pub fill_pct: u8,
}

impl RiskMeter {
    pub fn for_profile(profile: RiskProfile) -> Self {
        let position_pct = profile.ordinal() as u8 * MARKER_STEP_PCT;
        Self {
            profile,
            label: profile.label(),
            position_pct,
            fill_pct: position_pct + FILL_OFFSET_PCT,
        }
    }
}

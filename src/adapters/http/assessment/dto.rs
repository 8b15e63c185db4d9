//! HTTP DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};

use crate::application::SubmitAssessmentResult;
use crate::domain::assessment::{AnswerSet, RiskProfile, UnresolvedAnswer};

/// Questionnaire submission, e.g. `{"answers": {"1": "1c", "2": "2a"}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub risk_profile: RiskProfile,
    pub label: &'static str,
    pub total_points: u32,
    pub answered_count: usize,
    pub score_pct: f64,
    /// Whether every question was answered with a known option.
    pub complete: bool,
    pub unresolved: Vec<UnresolvedAnswer>,
}

impl From<SubmitAssessmentResult> for AssessmentResponse {
    fn from(result: SubmitAssessmentResult) -> Self {
        let assessment = result.assessment;
        Self {
            risk_profile: assessment.profile,
            label: assessment.profile.label(),
            total_points: assessment.total_points,
            answered_count: assessment.answered_count,
            score_pct: assessment.score_pct,
            complete: assessment.complete,
            unresolved: assessment.unresolved,
        }
    }
}

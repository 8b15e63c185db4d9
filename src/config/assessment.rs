//! Assessment configuration

use serde::Deserialize;

/// Questionnaire submission rules
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentConfig {
    /// Reject submissions naming unknown questions or options instead of
    /// skipping those entries
    #[serde(default)]
    pub strict_answers: bool,
}

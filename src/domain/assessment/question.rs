//! Questionnaire value types.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::foundation::ValidationError;

/// Risk weight attached to an answer option (0 = most cautious, 4 = most aggressive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RiskWeight(u8);

impl RiskWeight {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 4;

    /// Creates a weight; out-of-range values fail at compile time in const contexts.
    pub const fn new(value: u8) -> Self {
        assert!(value <= Self::MAX, "risk weight must be 0-4");
        Self(value)
    }

    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::out_of_range(
                "risk_weight",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub text: &'static str,
    pub risk_weight: RiskWeight,
}

/// A questionnaire question with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Number of options every question must offer.
    pub const OPTION_COUNT: usize = 5;

    /// Finds an option by identifier.
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Lowest-risk option.
    pub fn most_cautious(&self) -> Option<&AnswerOption> {
        self.options.iter().min_by_key(|o| o.risk_weight)
    }

    /// Highest-risk option.
    pub fn most_aggressive(&self) -> Option<&AnswerOption> {
        self.options.iter().max_by_key(|o| o.risk_weight)
    }

    /// Verifies the question offers exactly five options weighted 0 through 4.
    pub fn check_invariants(&self) -> Result<(), ValidationError> {
        if self.options.len() != Self::OPTION_COUNT {
            return Err(ValidationError::out_of_range(
                format!("question[{}].options", self.id),
                Self::OPTION_COUNT as i32,
                Self::OPTION_COUNT as i32,
                self.options.len() as i32,
            ));
        }

        let weights: BTreeSet<u8> = self.options.iter().map(|o| o.risk_weight.value()).collect();
        let expected: BTreeSet<u8> = (RiskWeight::MIN..=RiskWeight::MAX).collect();
        if weights != expected {
            return Err(ValidationError::invalid_format(
                format!("question[{}].options", self.id),
                "risk weights must be exactly 0, 1, 2, 3 and 4",
            ));
        }

        Ok(())
    }
}

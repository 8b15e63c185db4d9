//! Assessment module - Risk tolerance questionnaire and classification.
//!
//! # Domain Invariants
//!
//! 1. Every option carries a risk weight between 0 and 4
//! 2. Every question offers exactly five options weighted 0, 1, 2, 3 and 4
//! 3. Classification is total: any answer set yields a profile
//! 4. The profile order is fixed: no < low < medium < high < very-high

mod answers;
mod classifier;
mod question;
mod questionnaire;
mod risk_profile;

pub use answers::AnswerSet;
pub use classifier::{classify, Assessment, RiskClassifier, UnresolvedAnswer, UnresolvedReason};
pub use question::{AnswerOption, Question, RiskWeight};
pub use questionnaire::Questionnaire;
pub use risk_profile::RiskProfile;

//! Risk Classifier - maps questionnaire answers to a [`RiskProfile`].
//!
//! The score is the mean risk weight over the answers that resolve against
//! the questionnaire, expressed as a percentage of the maximum weight (4) and
//! bucketed into five equal-width bands. Dividing by the number of resolved
//! answers rather than the number of questions keeps partial submissions from
//! drifting towards the cautious end.
//!
//! Entries that reference an unknown question or option never fail
//! classification; they are reported in [`Assessment::unresolved`] and
//! excluded from the average. [`RiskClassifier::validate`] offers the strict
//! alternative.

use serde::Serialize;

use super::answers::{parse_question_id, AnswerSet};
use super::question::RiskWeight;
use super::questionnaire::Questionnaire;
use super::risk_profile::RiskProfile;
use crate::domain::foundation::ValidationError;

/// Why an answer entry was left out of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    UnknownQuestion,
    UnknownOption,
}

/// An answer entry that could not be resolved. `question_id` is the key as
/// submitted, which need not be a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedAnswer {
    pub question_id: String,
    pub option_id: String,
    pub reason: UnresolvedReason,
}

/// Outcome of scoring an answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub profile: RiskProfile,
    pub total_points: u32,
    pub answered_count: usize,
    /// Mean weight as a percentage of the maximum (0.0 - 100.0).
    pub score_pct: f64,
    /// Every question in the questionnaire has a resolvable answer.
    pub complete: bool,
    pub unresolved: Vec<UnresolvedAnswer>,
}

/// Scores answer sets against a questionnaire.
#[derive(Debug, Clone, Copy)]
pub struct RiskClassifier<'q> {
    questionnaire: &'q Questionnaire,
}

impl RiskClassifier<'static> {
    /// Classifier over the standard questionnaire.
    pub fn standard() -> Self {
        Self::new(Questionnaire::standard())
    }
}

impl<'q> RiskClassifier<'q> {
    pub fn new(questionnaire: &'q Questionnaire) -> Self {
        Self { questionnaire }
    }

    /// Scores the answers, collecting entries that do not resolve.
    ///
    /// # Edge Cases
    /// - No resolvable answers: profile `No`, score 0
    pub fn assess(&self, answers: &AnswerSet) -> Assessment {
        let mut total_points: u32 = 0;
        let mut answered_count: usize = 0;
        let mut unresolved = Vec::new();
        let complete = answers.is_complete(self.questionnaire);

        for (key, option_id) in answers.iter() {
            let question = parse_question_id(key).and_then(|id| self.questionnaire.question(id));
            let reason = match question {
                None => UnresolvedReason::UnknownQuestion,
                Some(question) => match question.option(option_id) {
                    Some(option) => {
                        total_points += u32::from(option.risk_weight.value());
                        answered_count += 1;
                        continue;
                    }
                    None => UnresolvedReason::UnknownOption,
                },
            };
            unresolved.push(UnresolvedAnswer {
                question_id: key.to_string(),
                option_id: option_id.to_string(),
                reason,
            });
        }

        if answered_count == 0 {
            return Assessment {
                profile: RiskProfile::No,
                total_points,
                answered_count,
                score_pct: 0.0,
                complete,
                unresolved,
            };
        }

        let average = f64::from(total_points) / answered_count as f64;
        let score_pct = average / f64::from(RiskWeight::MAX) * 100.0;

        Assessment {
            profile: RiskProfile::from_score_pct(score_pct),
            total_points,
            answered_count,
            score_pct,
            complete,
            unresolved,
        }
    }

    /// Profile for the answers; unresolvable entries are ignored.
    pub fn classify(&self, answers: &AnswerSet) -> RiskProfile {
        self.assess(answers).profile
    }

    /// Rejects the first entry that does not resolve against the questionnaire.
    pub fn validate(&self, answers: &AnswerSet) -> Result<(), ValidationError> {
        for (key, option_id) in answers.iter() {
            let question = parse_question_id(key)
                .and_then(|id| self.questionnaire.question(id))
                .ok_or_else(|| {
                    ValidationError::invalid_format("answers", format!("unknown question {}", key))
                })?;
            if question.option(option_id).is_none() {
                return Err(ValidationError::invalid_format(
                    "answers",
                    format!("unknown option '{}' for question {}", option_id, key),
                ));
            }
        }
        Ok(())
    }
}

/// Classifies answers against the standard questionnaire.
pub fn classify(answers: &AnswerSet) -> RiskProfile {
    RiskClassifier::standard().classify(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_with_letter(letter: char) -> AnswerSet {
        (1..=8u32).map(|q| (q, format!("{}{}", q, letter))).collect()
    }

    #[test]
    fn empty_answers_classify_as_no_risk() {
        assert_eq!(classify(&AnswerSet::new()), RiskProfile::No);
    }

    #[test]
    fn all_lowest_options_classify_as_no_risk() {
        assert_eq!(classify(&all_with_letter('a')), RiskProfile::No);
    }

    #[test]
    fn all_highest_options_classify_as_very_high_risk() {
        let assessment = RiskClassifier::standard().assess(&all_with_letter('e'));
        assert_eq!(assessment.profile, RiskProfile::VeryHigh);
        assert_eq!(assessment.total_points, 32);
        assert!((assessment.score_pct - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_middle_options_classify_as_medium() {
        let assessment = RiskClassifier::standard().assess(&all_with_letter('c'));
        assert!(assessment.complete);
        assert_eq!(assessment.answered_count, 8);
        assert_eq!(assessment.total_points, 16);
        assert!((assessment.score_pct - 50.0).abs() < f64::EPSILON);
        assert_eq!(assessment.profile, RiskProfile::Medium);
    }

    #[test]
    fn partial_answers_are_averaged_over_answered_questions() {
        let answers = AnswerSet::new().with_answer(1, "1a").with_answer(2, "2b");
        let assessment = RiskClassifier::standard().assess(&answers);
        assert!(!assessment.complete);
        assert_eq!(assessment.answered_count, 2);
        assert!((assessment.score_pct - 12.5).abs() < f64::EPSILON);
        assert_eq!(assessment.profile, RiskProfile::No);
    }

    #[test]
    fn single_aggressive_answer_is_not_diluted_by_unanswered_questions() {
        let answers = AnswerSet::new().with_answer(3, "3e");
        assert_eq!(classify(&answers), RiskProfile::VeryHigh);
    }

    #[test]
    fn each_bucket_is_reachable() {
        assert_eq!(classify(&all_with_letter('b')), RiskProfile::Low);
        assert_eq!(classify(&all_with_letter('d')), RiskProfile::High);
    }

    #[test]
    fn unknown_question_is_skipped_and_reported() {
        let base = all_with_letter('c');
        let with_bogus = base.clone().with_answer(42, "42a");

        let assessment = RiskClassifier::standard().assess(&with_bogus);
        assert_eq!(assessment.profile, classify(&base));
        assert_eq!(assessment.answered_count, 8);
        assert_eq!(
            assessment.unresolved,
            vec![UnresolvedAnswer {
                question_id: "42".to_string(),
                option_id: "42a".to_string(),
                reason: UnresolvedReason::UnknownQuestion,
            }]
        );
    }

    #[test]
    fn unknown_option_is_skipped_and_reported() {
        let answers = AnswerSet::new().with_answer(1, "1e").with_answer(2, "1a");
        let assessment = RiskClassifier::standard().assess(&answers);
        assert_eq!(assessment.answered_count, 1);
        assert_eq!(assessment.profile, RiskProfile::VeryHigh);
        assert_eq!(assessment.unresolved[0].reason, UnresolvedReason::UnknownOption);
    }

    #[test]
    fn out_of_range_question_keys_are_unknown_questions() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"-1": "1a", "1": "1e", "4294967296": "2a"}"#).unwrap();
        let assessment = RiskClassifier::standard().assess(&answers);

        assert_eq!(assessment.answered_count, 1);
        assert_eq!(assessment.profile, RiskProfile::VeryHigh);
        let mut skipped: Vec<&str> = assessment
            .unresolved
            .iter()
            .inspect(|u| assert_eq!(u.reason, UnresolvedReason::UnknownQuestion))
            .map(|u| u.question_id.as_str())
            .collect();
        skipped.sort_unstable();
        assert_eq!(skipped, vec!["-1", "4294967296"]);

        let err = RiskClassifier::standard().validate(&answers).unwrap_err();
        assert!(err.to_string().contains("unknown question -1"));
    }

    #[test]
    fn fully_unresolvable_answers_default_to_no_risk() {
        let answers = AnswerSet::new().with_answer(0, "x").with_answer(1, "zz");
        let assessment = RiskClassifier::standard().assess(&answers);
        assert_eq!(assessment.profile, RiskProfile::No);
        assert_eq!(assessment.answered_count, 0);
        assert_eq!(assessment.unresolved.len(), 2);
    }

    #[test]
    fn validate_accepts_resolvable_answers() {
        assert!(RiskClassifier::standard().validate(&all_with_letter('a')).is_ok());
        assert!(RiskClassifier::standard().validate(&AnswerSet::new()).is_ok());
    }

    #[test]
    fn validate_rejects_unknown_entries() {
        let classifier = RiskClassifier::standard();
        let bad_question = AnswerSet::new().with_answer(9, "9a");
        let bad_option = AnswerSet::new().with_answer(1, "1f");

        let err = classifier.validate(&bad_question).unwrap_err();
        assert!(err.to_string().contains("unknown question 9"));
        let err = classifier.validate(&bad_option).unwrap_err();
        assert!(err.to_string().contains("unknown option '1f'"));
    }
}

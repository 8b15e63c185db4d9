//! Answers collected during a single assessment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::questionnaire::Questionnaire;

/// Chosen option per question key. Partial sets are allowed.
///
/// Serialized as a JSON object keyed by question id, e.g. `{"1": "1c"}`.
/// Keys are kept as submitted; one that is not a valid question id still
/// deserializes and is reported by the classifier as an unknown question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for a question, replacing any previous choice.
    pub fn answer(&mut self, question_id: u32, option_id: impl Into<String>) -> &mut Self {
        self.0.insert(question_id.to_string(), option_id.into());
        self
    }

    /// Builder form of [`AnswerSet::answer`].
    pub fn with_answer(mut self, question_id: u32, option_id: impl Into<String>) -> Self {
        self.answer(question_id, option_id);
        self
    }

    pub fn get(&self, question_id: u32) -> Option<&str> {
        self.0.get(&question_id.to_string()).map(String::as_str)
    }

    pub fn remove(&mut self, question_id: u32) -> Option<String> {
        self.0.remove(&question_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in key order, with keys as submitted.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(q, o)| (q.as_str(), o.as_str()))
    }

    /// True when every question in the questionnaire has a resolvable answer.
    pub fn is_complete(&self, questionnaire: &Questionnaire) -> bool {
        questionnaire.questions().iter().all(|question| {
            self.iter().any(|(key, option_id)| {
                parse_question_id(key) == Some(question.id) && question.option(option_id).is_some()
            })
        })
    }
}

/// Question id named by an answer key, if the key is a non-negative integer
/// that fits a `u32`.
pub fn parse_question_id(key: &str) -> Option<u32> {
    key.trim().parse().ok()
}

impl<S: Into<String>> FromIterator<(u32, S)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(q, o)| (q.to_string(), o.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answering_twice_keeps_latest_choice() {
        let mut answers = AnswerSet::new();
        answers.answer(1, "1a").answer(1, "1e");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(1), Some("1e"));
    }

    #[test]
    fn deserializes_from_string_keyed_object() {
        let answers: AnswerSet = serde_json::from_str(r#"{"1": "1a", "2": "2b"}"#).unwrap();
        assert_eq!(answers.get(1), Some("1a"));
        assert_eq!(answers.get(2), Some("2b"));
    }

    #[test]
    fn keeps_keys_that_are_not_question_ids() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"one": "1a", "-1": "1b", "4294967296": "1c"}"#).unwrap();
        assert_eq!(answers.len(), 3);
        let keys: Vec<&str> = answers.iter().map(|(key, _)| key).collect();
        assert!(keys.contains(&"one"));
        assert!(keys.contains(&"-1"));
        assert!(keys.contains(&"4294967296"));
    }

    #[test]
    fn question_ids_must_fit_u32() {
        assert_eq!(parse_question_id("7"), Some(7));
        assert_eq!(parse_question_id(" 8 "), Some(8));
        assert_eq!(parse_question_id("4294967295"), Some(u32::MAX));
        assert_eq!(parse_question_id("4294967296"), None);
        assert_eq!(parse_question_id("-1"), None);
        assert_eq!(parse_question_id("one"), None);
    }

    #[test]
    fn completeness_requires_every_question_resolvable() {
        let questionnaire = Questionnaire::standard();
        let mut answers: AnswerSet = (1..=8).map(|q| (q, format!("{}c", q))).collect();
        assert!(answers.is_complete(questionnaire));

        answers.answer(8, "8z");
        assert!(!answers.is_complete(questionnaire));

        answers.remove(8);
        assert!(!answers.is_complete(questionnaire));
    }
}

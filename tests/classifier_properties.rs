//! Property-based tests for risk classification and the portfolio tables.

use proptest::prelude::*;

use savvy_advisor::domain::assessment::{classify, AnswerSet, RiskClassifier, RiskProfile};
use savvy_advisor::domain::portfolio::{describe, recommend};

const LETTERS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// Strategy: a subset of questions 1-8, each with a weight 0-4.
fn answers_strategy() -> impl Strategy<Value = Vec<(u32, usize)>> {
    prop::collection::btree_map(1..=8u32, 0..5usize, 0..=8)
        .prop_map(|m| m.into_iter().collect())
}

fn option_id(question_id: u32, weight: usize) -> String {
    format!("{}{}", question_id, LETTERS[weight])
}

fn to_answer_set(entries: &[(u32, usize)]) -> AnswerSet {
    entries
        .iter()
        .map(|&(q, w)| (q, option_id(q, w)))
        .collect()
}

proptest! {
    // 1. Entry order never changes the outcome
    #[test]
    fn order_invariant(entries in answers_strategy().prop_shuffle()) {
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(
            classify(&to_answer_set(&entries)),
            classify(&to_answer_set(&reversed))
        );
    }

    // 2. Unknown questions and options are ignored
    #[test]
    fn unresolvable_entries_ignored(
        entries in answers_strategy(),
        bogus_question in 9..1000u32,
        bogus_option in "[f-z]{1,3}",
    ) {
        let clean = to_answer_set(&entries);
        let mut noisy = clean.clone();
        noisy.answer(bogus_question, "9a");
        if let Some(&(q, _)) = entries.first() {
            // replacing an answer with an unknown option drops that entry
            let mut dropped = clean.clone();
            dropped.remove(q);
            let mut replaced = clean.clone();
            replaced.answer(q, format!("{}{}", q, bogus_option));
            prop_assert_eq!(classify(&replaced), classify(&dropped));
        }
        prop_assert_eq!(classify(&noisy), classify(&clean));
    }

    // 3. The profile is the bucket of the mean weight
    #[test]
    fn profile_matches_mean_weight(entries in answers_strategy()) {
        let assessment = RiskClassifier::standard().assess(&to_answer_set(&entries));
        prop_assert_eq!(assessment.answered_count, entries.len());

        if entries.is_empty() {
            prop_assert_eq!(assessment.profile, RiskProfile::No);
        } else {
            let total: usize = entries.iter().map(|&(_, w)| w).sum();
            prop_assert_eq!(assessment.total_points as usize, total);
            let pct = total as f64 / entries.len() as f64 / 4.0 * 100.0;
            prop_assert_eq!(assessment.profile, RiskProfile::from_score_pct(pct));
        }
    }

    // 4. Raising one answer never lowers the profile
    #[test]
    fn monotonic_in_each_answer(entries in answers_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!entries.is_empty());
        let i = pick.index(entries.len());
        let (q, w) = entries[i];
        prop_assume!(w < 4);

        let mut raised = entries.clone();
        raised[i] = (q, w + 1);
        prop_assert!(classify(&to_answer_set(&raised)) >= classify(&to_answer_set(&entries)));
    }

    // 5. Classification is total over arbitrary input
    #[test]
    fn arbitrary_input_classifies(raw in prop::collection::vec((any::<u32>(), ".{0,6}"), 0..12)) {
        let answers: AnswerSet = raw.into_iter().collect();
        let profile = classify(&answers);
        prop_assert!(RiskProfile::ALL.contains(&profile));
    }

    // 6. Uniform answers land on the expected profile
    #[test]
    fn uniform_answers(weight in 0..5usize) {
        let entries: Vec<(u32, usize)> = (1..=8).map(|q| (q, weight)).collect();
        let expected = [
            RiskProfile::No,
            RiskProfile::Low,
            RiskProfile::Medium,
            RiskProfile::High,
            RiskProfile::VeryHigh,
        ][weight];
        prop_assert_eq!(classify(&to_answer_set(&entries)), expected);
    }
}

#[test]
fn every_profile_has_description_and_full_allocation() {
    for profile in RiskProfile::ALL {
        let description = describe(profile);
        assert!(!description.title.is_empty());
        assert!(!description.characteristics.is_empty());
        assert_eq!(recommend(profile).total_allocation(), 100, "{profile}");
    }
}

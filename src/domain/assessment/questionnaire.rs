//! The standard eight-question risk tolerance questionnaire.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::question::{AnswerOption, Question, RiskWeight};
use crate::domain::foundation::ValidationError;

const fn option(id: &'static str, text: &'static str, weight: u8) -> AnswerOption {
    AnswerOption {
        id,
        text,
        risk_weight: RiskWeight::new(weight),
    }
}

static PRIMARY_GOAL: [AnswerOption; 5] = [
    option("1a", "Preserving my capital and avoiding losses", 0),
    option("1b", "Generating steady income", 1),
    option("1c", "Achieving balanced growth and income", 2),
    option("1d", "Growing my assets over the long term", 3),
    option("1e", "Maximizing growth potential, even with significant risks", 4),
];

static DRAWDOWN_REACTION: [AnswerOption; 5] = [
    option("2a", "I would sell everything immediately to prevent further losses", 0),
    option("2b", "I would sell some investments to reduce my exposure", 1),
    option("2c", "I would hold on and wait for recovery", 2),
    option("2d", "I would see this as an opportunity and maintain my investment strategy", 3),
    option("2e", "I would invest more to take advantage of lower prices", 4),
];

static TIME_HORIZON: [AnswerOption; 5] = [
    option("3a", "Less than 1 year", 0),
    option("3b", "1-3 years", 1),
    option("3c", "3-5 years", 2),
    option("3d", "5-10 years", 3),
    option("3e", "More than 10 years", 4),
];

static EXPERIENCE: [AnswerOption; 5] = [
    option("4a", "I have no investment experience", 0),
    option("4b", "I have some experience with basic investments like savings accounts and CDs", 1),
    option("4c", "I have invested in mutual funds or exchange-traded funds (ETFs)", 2),
    option("4d", "I have experience with individual stocks and bonds", 3),
    option("4e", "I actively trade various investment types including options or crypto", 4),
];

static SAVINGS_CAPACITY: [AnswerOption; 5] = [
    option("5a", "I'm currently unable to save or invest", 0),
    option("5b", "Less than 5% of my monthly income", 1),
    option("5c", "5-10% of my monthly income", 2),
    option("5d", "10-20% of my monthly income", 3),
    option("5e", "More than 20% of my monthly income", 4),
];

static LIQUIDITY: [AnswerOption; 5] = [
    option("6a", "I need immediate access to all my investments", 0),
    option("6b", "I need access to most of my investments within a few months", 1),
    option("6c", "I need access to some of my investments, but can lock up a portion", 2),
    option("6d", "I only need access to a small portion of my investments", 3),
    option("6e", "I don't need access to these investments for several years", 4),
];

static SCENARIO_PREFERENCE: [AnswerOption; 5] = [
    option("7a", "Investment A: Guaranteed 4% annual return", 0),
    option("7b", "Investment B: 90% chance of 6% return, 10% chance of 1% return", 1),
    option("7c", "Investment C: 80% chance of 8% return, 20% chance of -2% return", 2),
    option("7d", "Investment D: 60% chance of 12% return, 40% chance of -5% return", 3),
    option("7e", "Investment E: 50% chance of 20% return, 50% chance of -10% return", 4),
];

static ALLOCATION_CHOICE: [AnswerOption; 5] = [
    option("8a", "100% in low-risk, low-return investments", 0),
    option("8b", "75% in low-risk, 25% in medium-risk investments", 1),
    option("8c", "50% in low-risk, 40% in medium-risk, 10% in high-risk investments", 2),
    option("8d", "25% in low-risk, 50% in medium-risk, 25% in high-risk investments", 3),
    option("8e", "10% in low-risk, 40% in medium-risk, 50% in high-risk investments", 4),
];

static STANDARD_QUESTIONS: [Question; 8] = [
    Question {
        id: 1,
        text: "What is your primary goal for investing?",
        options: &PRIMARY_GOAL,
    },
    Question {
        id: 2,
        text: "How would you react if your investments lost 20% of their value in a month?",
        options: &DRAWDOWN_REACTION,
    },
    Question {
        id: 3,
        text: "What is your time horizon for your investments?",
        options: &TIME_HORIZON,
    },
    Question {
        id: 4,
        text: "Which statement best describes your investment experience?",
        options: &EXPERIENCE,
    },
    Question {
        id: 5,
        text: "How much of your monthly income can you comfortably save or invest?",
        options: &SAVINGS_CAPACITY,
    },
    Question {
        id: 6,
        text: "How important is liquidity in your investments?",
        options: &LIQUIDITY,
    },
    Question {
        id: 7,
        text: "Which scenario would you prefer?",
        options: &SCENARIO_PREFERENCE,
    },
    Question {
        id: 8,
        text: "How would you allocate your investments if given these options?",
        options: &ALLOCATION_CHOICE,
    },
];

static STANDARD: Lazy<Questionnaire> = Lazy::new(|| Questionnaire::new(&STANDARD_QUESTIONS));

/// An ordered set of questions with an id index.
#[derive(Debug, Clone, Serialize)]
pub struct Questionnaire {
    questions: &'static [Question],
    #[serde(skip)]
    index: HashMap<u32, usize>,
}

impl Questionnaire {
    /// Builds a questionnaire over a static question table. Later duplicates
    /// of a question id are unreachable by lookup.
    pub fn new(questions: &'static [Question]) -> Self {
        let mut index = HashMap::with_capacity(questions.len());
        for (pos, question) in questions.iter().enumerate() {
            index.entry(question.id).or_insert(pos);
        }
        Self { questions, index }
    }

    /// The process-wide standard questionnaire.
    pub fn standard() -> &'static Questionnaire {
        &STANDARD
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Finds a question by identifier.
    pub fn question(&self, question_id: u32) -> Option<&'static Question> {
        self.index.get(&question_id).map(|&pos| &self.questions[pos])
    }

    /// Checks every question's option invariants and id uniqueness.
    pub fn check_invariants(&self) -> Result<(), ValidationError> {
        if self.index.len() != self.questions.len() {
            return Err(ValidationError::invalid_format(
                "questions",
                "question identifiers must be unique",
            ));
        }
        self.questions.iter().try_for_each(Question::check_invariants)
    }
}

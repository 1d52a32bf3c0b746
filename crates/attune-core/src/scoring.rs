//! Scoring engine: answers → signed raw sums → 0..=100 percentages.
//!
//! ## Contributions
//!
//! | Question kind | Answer | Contribution |
//! |---------------|--------|--------------|
//! | Forced | A | +1 |
//! | Forced | B | -1 |
//! | Likert | v in 1..=7 | v - 4 (negated when reverse-scored) |
//! | any | missing | 0 |
//!
//! ## Normalization
//!
//! percent = clamp((raw + max) / (2 · max) · 100, 0, 100), rounded to two
//! decimals, where `max` is the bank's largest raw magnitude for the
//! dimension (16 for the full bank).

use serde::{Deserialize, Serialize};

use crate::answers::{Answer, AnswerSet, Choice};
use crate::dimension::Dimension;
use crate::error::{InputError, Result};
use crate::questions::{Question, QuestionBank, QuestionKind};

/// Signed per-dimension sums, indexed by `Dimension::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawScores(pub [i32; 4]);

impl RawScores {
    pub fn get(&self, dimension: Dimension) -> i32 {
        self.0[dimension.index()]
    }
}

/// Normalized dimension scores, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub social_energy: f64,
    pub attraction_driver: f64,
    pub decision_filter: f64,
    pub relationship_rhythm: f64,
}

impl Scores {
    pub fn new(social_energy: f64, attraction_driver: f64, decision_filter: f64, relationship_rhythm: f64) -> Self {
        Self {
            social_energy: social_energy.clamp(0.0, 100.0),
            attraction_driver: attraction_driver.clamp(0.0, 100.0),
            decision_filter: decision_filter.clamp(0.0, 100.0),
            relationship_rhythm: relationship_rhythm.clamp(0.0, 100.0),
        }
    }

    pub fn neutral() -> Self {
        Self::new(50.0, 50.0, 50.0, 50.0)
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::SocialEnergy => self.social_energy,
            Dimension::AttractionDriver => self.attraction_driver,
            Dimension::DecisionFilter => self.decision_filter,
            Dimension::RelationshipRhythm => self.relationship_rhythm,
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [
            self.social_energy,
            self.attraction_driver,
            self.decision_filter,
            self.relationship_rhythm,
        ]
    }

    pub fn from_array(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Score rounded to a whole number, for prose
    pub fn rounded(&self, dimension: Dimension) -> u32 {
        self.get(dimension).round() as u32
    }
}

impl Default for Scores {
    fn default() -> Self {
        Self::neutral()
    }
}

fn contribution(question: &Question, answer: Answer) -> Result<i32> {
    match (question.kind, answer) {
        (QuestionKind::Forced { .. }, Answer::Forced(Choice::A)) => Ok(1),
        (QuestionKind::Forced { .. }, Answer::Forced(Choice::B)) => Ok(-1),
        (QuestionKind::Likert { reverse }, Answer::Likert(value)) => {
            if !(Answer::LIKERT_MIN..=Answer::LIKERT_MAX).contains(&value) {
                return Err(InputError::LikertOutOfRange {
                    question_id: question.id.to_string(),
                    value,
                });
            }
            let signed = value as i32 - Answer::LIKERT_MIDPOINT as i32;
            Ok(if reverse { -signed } else { signed })
        }
        (kind, answer) => Err(InputError::AnswerKindMismatch {
            question_id: question.id.to_string(),
            expected: kind.label(),
            actual: answer.label(),
        }),
    }
}

/// Sum signed contributions per dimension.
///
/// Unanswered questions contribute 0. Unknown ids, out-of-range Likert
/// values and kind mismatches are rejected.
pub fn score_raw(answers: &AnswerSet, bank: &QuestionBank) -> Result<RawScores> {
    let mut raw = RawScores::default();

    for (id, answer) in answers.iter() {
        let question = bank
            .get(id)
            .ok_or_else(|| InputError::UnknownQuestion(id.to_string()))?;
        raw.0[question.dimension.index()] += contribution(question, answer)?;
    }

    Ok(raw)
}

/// Map a raw sum in [-max, max] to a percentage.
pub fn normalize(raw: i32, max: i32) -> f64 {
    if max <= 0 {
        return 50.0;
    }
    let percent = ((raw + max) as f64 / (2 * max) as f64) * 100.0;
    (percent.clamp(0.0, 100.0) * 100.0).round() / 100.0
}

/// Score an answer set against a bank.
pub fn score(answers: &AnswerSet, bank: &QuestionBank) -> Result<Scores> {
    let raw = score_raw(answers, bank)?;
    let mut percents = [0.0; 4];
    for dim in Dimension::ALL {
        percents[dim.index()] = normalize(raw.get(dim), bank.max_raw(dim));
    }

    tracing::debug!(
        bank = ?bank.kind(),
        answered = answers.len(),
        raw = ?raw.0,
        "scored answer set"
    );

    Ok(Scores::from_array(percents))
}

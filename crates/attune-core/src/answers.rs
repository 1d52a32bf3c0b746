//! Answer values and answer sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::questions::QuestionBank;

/// Forced-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

/// A single answer: a forced-choice letter or a 1-7 Likert rating.
///
/// Serialized untagged, so JSON `"A"`, `"B"` and `5` all deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Forced(Choice),
    Likert(u8),
}

impl Answer {
    pub const LIKERT_MIN: u8 = 1;
    pub const LIKERT_MAX: u8 = 7;
    pub const LIKERT_MIDPOINT: u8 = 4;

    pub fn label(&self) -> &'static str {
        match self {
            Answer::Forced(_) => "forced",
            Answer::Likert(_) => "likert",
        }
    }
}

/// Question id to answer, kept in id order so serialization is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) -> Option<Answer> {
        self.answers.insert(question_id.into(), answer)
    }

    /// Builder-style insert
    pub fn with(mut self, question_id: impl Into<String>, answer: Answer) -> Self {
        self.insert(question_id, answer);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<Answer> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Answer)> {
        self.answers.iter().map(|(id, a)| (id.as_str(), *a))
    }

    /// Question ids in `bank` that have no answer
    pub fn missing(&self, bank: &QuestionBank) -> Vec<&'static str> {
        bank.questions()
            .iter()
            .filter(|q| !self.answers.contains_key(q.id))
            .map(|q| q.id)
            .collect()
    }

    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        self.missing(bank).is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, Answer)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_json_shapes() {
        let set: AnswerSet = serde_json::from_str(r#"{"se_f1": "A", "se_f2": "B", "se_l1": 6}"#).unwrap();
        assert_eq!(set.get("se_f1"), Some(Answer::Forced(Choice::A)));
        assert_eq!(set.get("se_f2"), Some(Answer::Forced(Choice::B)));
        assert_eq!(set.get("se_l1"), Some(Answer::Likert(6)));

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"se_f1":"A","se_f2":"B","se_l1":6}"#);
    }

    #[test]
    fn test_rejects_untyped_values() {
        assert!(serde_json::from_str::<AnswerSet>(r#"{"se_f1": "C"}"#).is_err());
        assert!(serde_json::from_str::<AnswerSet>(r#"{"se_f1": -2}"#).is_err());
    }

    #[test]
    fn test_missing() {
        let bank = QuestionBank::snapshot();
        let set = AnswerSet::new()
            .with("snap_se_f1", Answer::Forced(Choice::A))
            .with("snap_se_l1", Answer::Likert(4));
        assert_eq!(set.missing(&bank).len(), 6);
        assert!(!set.is_complete(&bank));
    }
}

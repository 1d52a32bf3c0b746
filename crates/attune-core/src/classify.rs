//! Type classification: scores → four-letter type code and display name.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::dimension::{Dimension, Pole};
use crate::error::InputError;
use crate::scoring::Scores;

/// Score at or above which the first pole is selected. A score of exactly
/// 50 resolves to the first pole.
pub const POLE_THRESHOLD: f64 = 50.0;

/// One pole per dimension, in `Dimension::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode([Pole; 4]);

impl TypeCode {
    /// Returns `None` if a pole sits in the wrong position.
    pub fn new(poles: [Pole; 4]) -> Option<Self> {
        Dimension::ALL
            .iter()
            .zip(poles.iter())
            .all(|(d, p)| p.dimension() == *d)
            .then_some(Self(poles))
    }

    pub fn poles(&self) -> [Pole; 4] {
        self.0
    }

    pub fn pole(&self, dimension: Dimension) -> Pole {
        self.0[dimension.index()]
    }

    /// Number of positions where the two codes pick different poles (0..=4)
    pub fn count_mismatches(&self, other: &TypeCode) -> usize {
        self.0.iter().zip(other.0.iter()).filter(|(a, b)| a != b).count()
    }

    /// `"<social>-<attraction> <decision>-<rhythm>"`
    pub fn type_name(&self) -> String {
        let [a, b, c, d] = self.0;
        format!("{}-{} {}-{}", a.name(), b.name(), c.name(), d.name())
    }

    /// All sixteen codes in lexicographic pole order
    pub fn all() -> Vec<TypeCode> {
        let mut codes = Vec::with_capacity(16);
        for a in Dimension::SocialEnergy.poles() {
            for b in Dimension::AttractionDriver.poles() {
                for c in Dimension::DecisionFilter.poles() {
                    for d in Dimension::RelationshipRhythm.poles() {
                        codes.push(TypeCode([a, b, c, d]));
                    }
                }
            }
        }
        codes
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pole in &self.0 {
            write!(f, "{}", pole.letter())?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidTypeCode(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(invalid());
        }

        let mut poles = [Pole::Connector; 4];
        for (slot, c) in poles.iter_mut().zip(chars) {
            *slot = Pole::from_letter(c).ok_or_else(invalid)?;
        }
        TypeCode::new(poles).ok_or_else(invalid)
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Classifier output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub type_code: TypeCode,
    pub type_name: String,
}

pub fn pole_for(dimension: Dimension, score: f64) -> Pole {
    if score >= POLE_THRESHOLD {
        dimension.first_pole()
    } else {
        dimension.second_pole()
    }
}

/// Pick a pole per dimension and derive the type name.
pub fn classify(scores: &Scores) -> Classification {
    let poles = Dimension::ALL.map(|dim| pole_for(dim, scores.get(dim)));
    let type_code = TypeCode(poles);
    let type_name = type_code.type_name();

    tracing::debug!(%type_code, %type_name, "classified scores");

    Classification { type_code, type_name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answer, AnswerSet, Choice};
    use crate::questions::QuestionBank;
    use crate::scoring::score;

    #[test]
    fn test_classify_extremes() {
        let c = classify(&Scores::new(100.0, 0.0, 100.0, 0.0));
        assert_eq!(c.type_code.to_string(), "CVLA");
        assert_eq!(c.type_name, "Connector-Visionary Logic-Adaptive");
    }

    #[test]
    fn test_tie_resolves_to_first_pole() {
        // One A, one B, nothing else: raw sum 0 in every dimension
        let bank = QuestionBank::full();
        let set = AnswerSet::new()
            .with("se_f1", Answer::Forced(Choice::A))
            .with("se_f2", Answer::Forced(Choice::B))
            .with("ad_f1", Answer::Forced(Choice::B))
            .with("ad_f2", Answer::Forced(Choice::A))
            .with("df_l1", Answer::Likert(4))
            .with("rr_l1", Answer::Likert(7))
            .with("rr_l2", Answer::Likert(1));
        let scores = score(&set, &bank).unwrap();
        assert_eq!(scores.to_array(), [50.0; 4]);
        assert_eq!(classify(&scores).type_code.to_string(), "CPLS");

        let below = classify(&Scores::new(49.99, 49.99, 49.99, 49.99));
        assert_eq!(below.type_code.to_string(), "FVEA");
    }

    #[test]
    fn test_code_letters_valid_per_position() {
        for code in TypeCode::all() {
            let text = code.to_string();
            assert_eq!(text.len(), 4);
            for (c, dim) in text.chars().zip(Dimension::ALL) {
                let valid: Vec<char> = dim.poles().iter().map(|p| p.letter()).collect();
                assert!(valid.contains(&c));
            }
        }
        assert_eq!(TypeCode::all().len(), 16);
    }

    #[test]
    fn test_parse() {
        let code: TypeCode = "fpes".parse().unwrap();
        assert_eq!(code.to_string(), "FPES");
        assert!("CPL".parse::<TypeCode>().is_err());
        assert!("PCLS".parse::<TypeCode>().is_err());
        assert!("CPLX".parse::<TypeCode>().is_err());
    }

    #[test]
    fn test_new_checks_positions() {
        let code = TypeCode::new([Pole::Focuser, Pole::Present, Pole::Empathy, Pole::Adaptive]).unwrap();
        assert_eq!(code.to_string(), "FPEA");
        assert!(TypeCode::new([Pole::Present, Pole::Connector, Pole::Logic, Pole::Structured]).is_none());
        assert_eq!(
            "PCLS".parse::<TypeCode>(),
            Err(InputError::InvalidTypeCode("PCLS".to_string()))
        );
    }

    #[test]
    fn test_count_mismatches() {
        let a: TypeCode = "CPLS".parse().unwrap();
        let b: TypeCode = "CPES".parse().unwrap();
        let c: TypeCode = "FVEA".parse().unwrap();
        assert_eq!(a.count_mismatches(&a), 0);
        assert_eq!(a.count_mismatches(&b), 1);
        assert_eq!(a.count_mismatches(&c), 4);
        assert_eq!(c.count_mismatches(&a), 4);
    }

    #[test]
    fn test_idempotent() {
        let bank = QuestionBank::full();
        let set: AnswerSet = bank
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| match q.kind {
                crate::questions::QuestionKind::Forced { .. } if i % 2 == 0 => (q.id, Answer::Forced(Choice::A)),
                crate::questions::QuestionKind::Forced { .. } => (q.id, Answer::Forced(Choice::B)),
                crate::questions::QuestionKind::Likert { .. } => (q.id, Answer::Likert((i % 7) as u8 + 1)),
            })
            .collect();

        let first = classify(&score(&set, &bank).unwrap());
        let second = classify(&score(&set, &bank).unwrap());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_type_code_serde() {
        let code: TypeCode = "FVES".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"FVES\"");
        let back: TypeCode = serde_json::from_str("\"FVES\"").unwrap();
        assert_eq!(back, code);
    }
}

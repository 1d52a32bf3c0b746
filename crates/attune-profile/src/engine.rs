//! Assessment engine: score, classify, aggregate and validate as one step.
//!
//! A result is only ever returned after it passes validation. Any
//! validation failure surfaces to the caller unchanged; the engine does not
//! retry or repair content.

use attune_core::{score, AnswerSet, BankKind, InputError, QuestionBank};

use crate::aggregator::ContentAggregator;
use crate::config::EngineConfig;
use crate::couple::CoupleBuilder;
use crate::error::{EngineError, Result};
use crate::types::{CoupleResult, IndividualResult};
use crate::validator::{validate_couple, validate_individual};

pub struct AssessmentEngine {
    config: EngineConfig,
    aggregator: ContentAggregator,
    couples: CoupleBuilder,
}

impl AssessmentEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            aggregator: ContentAggregator::new(config.bounds.individual.clone()),
            couples: CoupleBuilder::new(config.bounds.couple.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Produce a validated individual result from an answer set.
    pub fn assess(&self, bank: BankKind, answers: &AnswerSet) -> Result<IndividualResult> {
        let bank = QuestionBank::for_kind(bank);
        self.assess_with(&bank, answers).inspect_err(|e| {
            tracing::warn!(error = %e, "individual assessment rejected");
        })
    }

    fn assess_with(&self, bank: &QuestionBank, answers: &AnswerSet) -> Result<IndividualResult> {
        if self.config.require_complete_answers {
            let missing = answers.missing(bank).len();
            if missing > 0 {
                return Err(InputError::MissingAnswers {
                    missing,
                    total: bank.len(),
                }
                .into());
            }
        }

        let scores = score(answers, bank)?;
        let result = self.aggregator.build(&scores);
        validate_individual(&result, &self.config.bounds.individual, "")?;

        tracing::info!(
            bank = ?bank.kind(),
            type_code = %result.type_code,
            "individual assessment complete"
        );
        Ok(result)
    }

    /// Merge two individual results into a validated couple result.
    ///
    /// Both inputs are re-validated first, so results deserialized from
    /// storage get the same guarantees as freshly assessed ones.
    pub fn build_couple(&self, a: &IndividualResult, b: &IndividualResult) -> Result<CoupleResult> {
        let couple = self.couples.build(a, b);
        validate_couple(&couple, &self.config.bounds)
            .map_err(EngineError::from)
            .inspect_err(|e| tracing::warn!(error = %e, "couple profile rejected"))?;

        tracing::info!(
            partner_a = %couple.partner_a.type_code,
            partner_b = %couple.partner_b.type_code,
            distance = couple.type_distance,
            "couple profile complete"
        );
        Ok(couple)
    }

    /// Assess both partners independently, then merge.
    pub fn assess_couple(&self, bank: BankKind, answers_a: &AnswerSet, answers_b: &AnswerSet) -> Result<CoupleResult> {
        let a = self.assess(bank, answers_a)?;
        let b = self.assess(bank, answers_b)?;
        self.build_couple(&a, &b)
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CountRange;
    use crate::content::compatibility_sentence;
    use crate::validator::Validate;
    use attune_core::{Answer, Choice, Dimension, QuestionKind};

    /// Lean every question of each dimension toward the first pole when
    /// `first[dim]` is true, otherwise toward the second.
    fn answers(bank: &QuestionBank, first: [bool; 4]) -> AnswerSet {
        bank.questions()
            .iter()
            .map(|q| {
                let toward_first = first[q.dimension.index()];
                let answer = match (q.kind, toward_first) {
                    (QuestionKind::Forced { .. }, true) => Answer::Forced(Choice::A),
                    (QuestionKind::Forced { .. }, false) => Answer::Forced(Choice::B),
                    (QuestionKind::Likert { reverse }, first) => {
                        if first != reverse {
                            Answer::Likert(7)
                        } else {
                            Answer::Likert(1)
                        }
                    }
                };
                (q.id, answer)
            })
            .collect()
    }

    #[test]
    fn test_scenario_plus_minus() {
        let bank = QuestionBank::full();
        let engine = AssessmentEngine::default();
        let result = engine
            .assess(BankKind::Full, &answers(&bank, [true, false, true, false]))
            .unwrap();

        assert_eq!(result.scores.to_array(), [100.0, 0.0, 100.0, 0.0]);
        assert_eq!(result.type_code.to_string(), "CVLA");
        assert!(result.validate(&engine.config().bounds).is_ok());
    }

    #[test]
    fn test_every_type_assesses() {
        let bank = QuestionBank::full();
        let engine = AssessmentEngine::default();
        for mask in 0..16u8 {
            let first = [mask & 8 != 0, mask & 4 != 0, mask & 2 != 0, mask & 1 != 0];
            let result = engine.assess(BankKind::Full, &answers(&bank, first)).unwrap();
            for (dim, lean) in Dimension::ALL.iter().zip(first) {
                assert_eq!(result.type_code.pole(*dim).is_first(), lean);
            }
        }
    }

    #[test]
    fn test_snapshot_bank() {
        let bank = QuestionBank::snapshot();
        let result = AssessmentEngine::default()
            .assess(BankKind::Snapshot, &answers(&bank, [false, true, false, true]))
            .unwrap();
        assert_eq!(result.type_code.to_string(), "FPES");
        assert_eq!(result.scores.to_array(), [0.0, 100.0, 0.0, 100.0]);
    }

    #[test]
    fn test_partial_answers_lenient_by_default() {
        let set = AnswerSet::new().with("se_f1", Answer::Forced(Choice::B));
        let result = AssessmentEngine::default().assess(BankKind::Full, &set).unwrap();
        assert_eq!(result.type_code.to_string(), "FPLS");
    }

    #[test]
    fn test_require_complete_answers() {
        let engine = AssessmentEngine::new(EngineConfig {
            require_complete_answers: true,
            ..EngineConfig::default()
        });
        let set = AnswerSet::new().with("se_f1", Answer::Forced(Choice::B));
        let err = engine.assess(BankKind::Full, &set).unwrap_err();
        assert_eq!(
            err,
            EngineError::Input(InputError::MissingAnswers { missing: 31, total: 32 })
        );
    }

    #[test]
    fn test_input_errors_surface() {
        let set = AnswerSet::new().with("se_f1", Answer::Forced(Choice::A));
        let err = AssessmentEngine::default().assess(BankKind::Snapshot, &set).unwrap_err();
        assert!(matches!(err, EngineError::Input(InputError::UnknownQuestion(_))));
        assert!(!err.user_message().contains("se_f1"));
    }

    #[test]
    fn test_validation_errors_surface_without_partial_result() {
        let mut config = EngineConfig::default();
        config.bounds.individual.strengths.items = CountRange::new(13, 20);
        let engine = AssessmentEngine::new(config);
        let bank = QuestionBank::full();

        let err = engine
            .assess(BankKind::Full, &answers(&bank, [true; 4]))
            .unwrap_err();
        match &err {
            EngineError::Validation(v) => {
                assert_eq!(v.section, "strengths");
                assert_eq!(v.expected_range, "13-20");
                assert_eq!(v.actual_value, "12");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.user_message(), "We could not generate your results. Please try again.");
    }

    #[test]
    fn test_identical_couple() {
        let bank = QuestionBank::full();
        let set = answers(&bank, [true, false, false, true]);
        let couple = AssessmentEngine::default()
            .assess_couple(BankKind::Full, &set, &set)
            .unwrap();

        assert_eq!(couple.type_distance, 0);
        assert!(couple
            .joint_profile
            .narrative
            .compatibility_overview
            .contains(compatibility_sentence(0)));
        let titles: Vec<_> = couple.joint_profile.joint_strengths.iter().map(|s| &s.title).collect();
        let mut unique = titles.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), titles.len());
    }

    #[test]
    fn test_every_couple_pairing_validates() {
        let bank = QuestionBank::full();
        let engine = AssessmentEngine::default();
        let results: Vec<IndividualResult> = (0..16u8)
            .map(|mask| {
                let first = [mask & 8 != 0, mask & 4 != 0, mask & 2 != 0, mask & 1 != 0];
                engine.assess(BankKind::Full, &answers(&bank, first)).unwrap()
            })
            .collect();

        for a in &results {
            for b in &results {
                let couple = engine.build_couple(a, b).unwrap();
                let reversed = engine.build_couple(b, a).unwrap();
                assert_eq!(couple.type_distance, reversed.type_distance);
            }
        }
    }

    #[test]
    fn test_couple_rejects_tampered_partner() {
        let bank = QuestionBank::full();
        let engine = AssessmentEngine::default();
        let a = engine.assess(BankKind::Full, &answers(&bank, [true; 4])).unwrap();
        let mut b = a.clone();
        b.content.growth_opportunities.truncate(1);

        let err = engine.build_couple(&a, &b).unwrap_err();
        match err {
            EngineError::Validation(v) => assert_eq!(v.section, "partner_b.growth_opportunities"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_result_json_shape() {
        let bank = QuestionBank::full();
        let result = AssessmentEngine::default()
            .assess(BankKind::Full, &answers(&bank, [true; 4]))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

        assert_eq!(json["type_code"], "CPLS");
        assert_eq!(json["type_name"], "Connector-Present Logic-Structured");
        assert_eq!(json["scores"]["social_energy"], 100.0);
        assert!(json["strengths"].is_array());
        assert!(json["narrative"]["overview"].is_string());
        assert_eq!(json["thirty_day_plan"]["week1"].as_array().unwrap().len(), 4);

        let back: IndividualResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}

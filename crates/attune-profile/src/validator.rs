//! Result validator.
//!
//! Walks a finished result and checks every bounded section: list item
//! counts, aggregate list word counts, per-entry word counts and prose
//! word/sentence counts. The first violation is returned; nothing is
//! accumulated.

use attune_core::{classify, Dimension};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ContentBounds, CountRange, ListBounds, ProseBounds, SectionBounds};
use crate::text::{sentence_count, word_count};
use crate::types::{
    AssessmentResult, CoupleResult, DailyAction, ExampleScenario, GrowthOpportunity, IndividualResult, QuickWin,
    Strength, ThirtyDayPlan,
};

/// A section that violated its length or shape contract.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Dotted path, for example `joint_profile.narrative.rhythm_dynamics`
    pub section: String,
    pub expected_range: String,
    pub actual_value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(section: String, measure: &str, expected: impl ToString, actual: impl ToString) -> Self {
        let expected_range = expected.to_string();
        let actual_value = actual.to_string();
        let message = format!("{section}: {measure} is {actual_value}, expected {expected_range}");
        Self {
            section,
            expected_range,
            actual_value,
            message,
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Anything that can check itself against content bounds.
pub trait Validate {
    fn validate(&self, bounds: &ContentBounds) -> ValidationResult;
}

impl Validate for IndividualResult {
    fn validate(&self, bounds: &ContentBounds) -> ValidationResult {
        validate_individual(self, &bounds.individual, "")
    }
}

impl Validate for CoupleResult {
    fn validate(&self, bounds: &ContentBounds) -> ValidationResult {
        validate_couple(self, bounds)
    }
}

impl Validate for AssessmentResult {
    fn validate(&self, bounds: &ContentBounds) -> ValidationResult {
        match self {
            AssessmentResult::Individual(result) => result.validate(bounds),
            AssessmentResult::Couple(result) => result.validate(bounds),
        }
    }
}

/// Dispatch on result shape
pub fn validate(result: &AssessmentResult, bounds: &ContentBounds) -> ValidationResult {
    result.validate(bounds)
}

struct Checker<'a> {
    prefix: &'a str,
    bounds: &'a SectionBounds,
}

impl<'a> Checker<'a> {
    fn path(&self, section: &str) -> String {
        if self.prefix.is_empty() {
            section.to_string()
        } else {
            format!("{}.{}", self.prefix, section)
        }
    }

    fn range(&self, section: &str, measure: &str, value: usize, range: CountRange) -> ValidationResult {
        if range.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::new(self.path(section), measure, range, value))
        }
    }

    fn words(&self, section: &str, text: &str, range: CountRange) -> ValidationResult {
        self.range(section, "word count", word_count(text), range)
    }

    fn title(&self, section: &str, text: &str) -> ValidationResult {
        self.words(section, text, self.bounds.title_words)
    }

    fn entry(&self, section: &str, text: &str) -> ValidationResult {
        self.words(section, text, self.bounds.entry_words)
    }

    fn prose(&self, section: &str, text: &str, bounds: ProseBounds) -> ValidationResult {
        self.words(section, text, bounds.words)?;
        self.range(section, "sentence count", sentence_count(text), bounds.sentences)
    }

    fn list<'t>(
        &self,
        section: &str,
        len: usize,
        texts: impl Iterator<Item = &'t str>,
        bounds: ListBounds,
    ) -> ValidationResult {
        self.range(section, "item count", len, bounds.items)?;
        if let Some(total) = bounds.total_words {
            let words: usize = texts.map(word_count).sum();
            self.range(section, "total word count", words, total)?;
        }
        Ok(())
    }

    fn strengths(&self, section: &str, items: &[Strength]) -> ValidationResult {
        self.list(
            section,
            items.len(),
            items.iter().flat_map(|s| [s.title.as_str(), s.detail.as_str()]),
            self.bounds.strengths,
        )?;
        for (i, s) in items.iter().enumerate() {
            self.title(&format!("{section}[{i}].title"), &s.title)?;
            self.entry(&format!("{section}[{i}].detail"), &s.detail)?;
        }
        Ok(())
    }

    fn growth(&self, section: &str, items: &[GrowthOpportunity]) -> ValidationResult {
        self.list(
            section,
            items.len(),
            items
                .iter()
                .flat_map(|g| [g.title.as_str(), g.detail.as_str(), g.action.as_str()]),
            self.bounds.growth,
        )?;
        for (i, g) in items.iter().enumerate() {
            self.title(&format!("{section}[{i}].title"), &g.title)?;
            self.entry(&format!("{section}[{i}].detail"), &g.detail)?;
            self.entry(&format!("{section}[{i}].action"), &g.action)?;
        }
        Ok(())
    }

    fn quick_wins(&self, section: &str, items: &[QuickWin]) -> ValidationResult {
        self.list(
            section,
            items.len(),
            items.iter().flat_map(|q| [q.action.as_str(), q.outcome.as_str()]),
            self.bounds.quick_wins,
        )?;
        for (i, q) in items.iter().enumerate() {
            self.words(&format!("{section}[{i}].action"), &q.action, self.bounds.entry_words)?;
            self.entry(&format!("{section}[{i}].outcome"), &q.outcome)?;
            self.title(&format!("{section}[{i}].timeframe"), &q.timeframe)?;
        }
        Ok(())
    }

    fn plan(&self, section: &str, plan: &ThirtyDayPlan) -> ValidationResult {
        for (week, actions) in plan.weeks() {
            let path = format!("{section}.{week}");
            self.list(&path, actions.len(), actions.iter().map(String::as_str), self.bounds.plan_week)?;
            for (i, action) in actions.iter().enumerate() {
                self.entry(&format!("{path}[{i}]"), action)?;
            }
        }
        Ok(())
    }

    fn narrative(&self, section: &str, fields: &[(&'static str, &str)]) -> ValidationResult {
        for (name, text) in fields {
            self.prose(&format!("{section}.{name}"), text, self.bounds.narrative)?;
        }
        Ok(())
    }

    fn scenarios(&self, section: &str, items: &[ExampleScenario]) -> ValidationResult {
        self.list(section, items.len(), std::iter::empty(), self.bounds.scenarios)?;
        for (i, s) in items.iter().enumerate() {
            self.title(&format!("{section}[{i}].title"), &s.title)?;
            self.entry(&format!("{section}[{i}].situation"), &s.situation)?;
            self.entry(&format!("{section}[{i}].approach"), &s.approach)?;
        }
        Ok(())
    }

    fn seven_day(&self, section: &str, items: &[DailyAction]) -> ValidationResult {
        self.list(section, items.len(), std::iter::empty(), self.bounds.seven_day_plan)?;
        for (i, d) in items.iter().enumerate() {
            self.range(&format!("{section}[{i}].day"), "day number", d.day as usize, CountRange::new(1, 7))?;
            self.entry(&format!("{section}[{i}].action"), &d.action)?;
        }
        Ok(())
    }

    fn milestones(&self, section: &str, items: &[String]) -> ValidationResult {
        self.list(section, items.len(), std::iter::empty(), self.bounds.milestones)?;
        for (i, m) in items.iter().enumerate() {
            self.entry(&format!("{section}[{i}]"), m)?;
        }
        Ok(())
    }
}

/// Validate one individual result; `prefix` is prepended to every section path.
pub fn validate_individual(result: &IndividualResult, bounds: &SectionBounds, prefix: &str) -> ValidationResult {
    let check = Checker { prefix, bounds };

    for dim in Dimension::ALL {
        let score = result.scores.get(dim);
        if !(0.0..=100.0).contains(&score) {
            return Err(ValidationError::new(
                check.path(&format!("scores.{}", dim.name().to_lowercase().replace(' ', "_"))),
                "score",
                "0-100",
                score,
            ));
        }
    }

    let expected = classify(&result.scores);
    if expected.type_code != result.type_code {
        return Err(ValidationError::new(
            check.path("type_code"),
            "type code",
            expected.type_code,
            result.type_code,
        ));
    }
    if expected.type_name != result.type_name {
        return Err(ValidationError::new(
            check.path("type_name"),
            "type name",
            expected.type_name,
            &result.type_name,
        ));
    }

    let content = &result.content;
    check.prose("relationship_approach", &content.relationship_approach, bounds.relationship_approach)?;
    check.strengths("strengths", &content.strengths)?;
    check.growth("growth_opportunities", &content.growth_opportunities)?;
    check.quick_wins("quick_wins", &content.quick_wins)?;
    check.plan("thirty_day_plan", &content.thirty_day_plan)?;
    check.narrative("narrative", &content.narrative.fields())?;

    let support = &content.supporting_content;
    let breakdowns = &support.dimension_breakdowns;
    check.list(
        "supporting_content.dimension_breakdowns",
        breakdowns.len(),
        std::iter::empty(),
        bounds.breakdowns,
    )?;
    for (i, b) in breakdowns.iter().enumerate() {
        check.title(&format!("supporting_content.dimension_breakdowns[{i}].label"), &b.label)?;
        check.entry(
            &format!("supporting_content.dimension_breakdowns[{i}].description"),
            &b.description,
        )?;
    }
    check.scenarios("supporting_content.example_scenarios", &support.example_scenarios)?;
    check.seven_day("supporting_content.seven_day_plan", &support.seven_day_plan)?;
    check.milestones("supporting_content.thirty_day_milestones", &support.thirty_day_milestones)?;

    tracing::debug!(type_code = %result.type_code, prefix, "individual result validated");
    Ok(())
}

/// Validate both partners first, then the joint profile.
pub fn validate_couple(result: &CoupleResult, bounds: &ContentBounds) -> ValidationResult {
    validate_individual(&result.partner_a, &bounds.individual, "partner_a")?;
    validate_individual(&result.partner_b, &bounds.individual, "partner_b")?;

    let distance = result.partner_a.type_code.count_mismatches(&result.partner_b.type_code);
    if distance != result.type_distance {
        return Err(ValidationError::new(
            "type_distance".to_string(),
            "type distance",
            distance,
            result.type_distance,
        ));
    }

    let check = Checker {
        prefix: "joint_profile",
        bounds: &bounds.couple,
    };
    let joint = &result.joint_profile;

    check.strengths("joint_strengths", &joint.joint_strengths)?;
    check.growth("shared_growth_areas", &joint.shared_growth_areas)?;
    check.prose(
        "relationship_approach",
        &joint.relationship_approach,
        bounds.couple.relationship_approach,
    )?;
    check.quick_wins("joint_quick_wins", &joint.joint_quick_wins)?;
    check.plan("joint_thirty_day_plan", &joint.joint_thirty_day_plan)?;
    check.narrative("narrative", &joint.narrative.fields())?;

    let support = &joint.supporting_content;
    let comparisons = &support.dimension_comparisons;
    check.list(
        "supporting_content.dimension_comparisons",
        comparisons.len(),
        std::iter::empty(),
        bounds.couple.breakdowns,
    )?;
    for (i, c) in comparisons.iter().enumerate() {
        check.entry(&format!("supporting_content.dimension_comparisons[{i}].note"), &c.note)?;
    }
    check.scenarios("supporting_content.example_scenarios", &support.example_scenarios)?;
    check.seven_day("supporting_content.seven_day_plan", &support.seven_day_plan)?;
    check.milestones("supporting_content.thirty_day_milestones", &support.thirty_day_milestones)?;

    tracing::debug!(
        partner_a = %result.partner_a.type_code,
        partner_b = %result.partner_b.type_code,
        "couple result validated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ContentAggregator;
    use attune_core::Scores;

    fn sample() -> IndividualResult {
        ContentAggregator::default().build(&Scores::new(80.0, 20.0, 65.0, 35.0))
    }

    #[test]
    fn test_valid_individual_passes() {
        let bounds = ContentBounds::default();
        assert_eq!(sample().validate(&bounds), Ok(()));
    }

    #[test]
    fn test_too_few_strengths() {
        let mut result = sample();
        result.content.strengths.truncate(2);
        let err = result.validate(&ContentBounds::default()).unwrap_err();
        assert_eq!(err.section, "strengths");
        assert_eq!(err.expected_range, "3-10");
        assert_eq!(err.actual_value, "2");
    }

    #[test]
    fn test_narrative_too_short() {
        let mut result = sample();
        result.content.narrative.decision_making = "Short. Very short. Too short.".to_string();
        let err = result.validate(&ContentBounds::default()).unwrap_err();
        assert_eq!(err.section, "narrative.decision_making");
        assert_eq!(err.actual_value, "5");
        assert!(err.message.contains("word count"));
    }

    #[test]
    fn test_sentence_bounds() {
        let mut bounds = ContentBounds::default();
        bounds.individual.narrative = ProseBounds {
            words: CountRange::new(1, 100),
            sentences: CountRange::new(1, 3),
        };
        let mut result = sample();
        result.content.narrative = crate::types::NarrativeSections {
            overview: "one two. three four. five six. seven eight.".to_string(),
            personality_insights: "a.".to_string(),
            communication_style: "a.".to_string(),
            attraction_profile: "a.".to_string(),
            decision_making: "a.".to_string(),
            relationship_rhythm: "a.".to_string(),
            growth_path: "a.".to_string(),
        };
        let err = result.validate(&bounds).unwrap_err();
        assert_eq!(err.section, "narrative.overview");
        assert_eq!(err.actual_value, "4");
        assert_eq!(err.expected_range, "1-3");
    }

    #[test]
    fn test_fail_fast_reports_first_violation() {
        let mut result = sample();
        result.content.relationship_approach = String::new();
        result.content.strengths.clear();
        let err = result.validate(&ContentBounds::default()).unwrap_err();
        assert_eq!(err.section, "relationship_approach");
    }

    #[test]
    fn test_entry_word_bounds() {
        let mut result = sample();
        result.content.growth_opportunities[1].action = "Go.".to_string();
        let err = result.validate(&ContentBounds::default()).unwrap_err();
        assert_eq!(err.section, "growth_opportunities[1].action");
    }

    #[test]
    fn test_plan_week_bounds() {
        let mut result = sample();
        result.content.thirty_day_plan.week3.clear();
        let err = result.validate(&ContentBounds::default()).unwrap_err();
        assert_eq!(err.section, "thirty_day_plan.week3");
        assert_eq!(err.actual_value, "0");
    }

    #[test]
    fn test_type_code_must_match_scores() {
        let mut result = sample();
        result.type_code = "FPES".parse().unwrap();
        let err = result.validate(&ContentBounds::default()).unwrap_err();
        assert_eq!(err.section, "type_code");
        assert_eq!(err.expected_range, "CVLA");
        assert_eq!(err.actual_value, "FPES");
    }

    #[test]
    fn test_dispatch_on_shape() {
        let result = AssessmentResult::Individual(sample());
        assert!(validate(&result, &ContentBounds::default()).is_ok());
    }

    #[test]
    fn test_error_serializes() {
        let err = ValidationError::new("quick_wins".to_string(), "item count", CountRange::new(3, 10), 2);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["section"], "quick_wins");
        assert_eq!(json["expected_range"], "3-10");
        assert_eq!(json["actual_value"], "2");
        assert_eq!(err.to_string(), "quick_wins: item count is 2, expected 3-10");
    }
}

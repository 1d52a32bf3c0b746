//! Result types produced by the aggregator and couple builder.

use attune_core::{Dimension, Pole, Scores, TypeCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strength {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthOpportunity {
    pub title: String,
    pub detail: String,
    /// Remedial action the reader can take
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWin {
    pub action: String,
    pub outcome: String,
    pub timeframe: String,
}

/// Four week-buckets of literal action strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirtyDayPlan {
    pub week1: Vec<String>,
    pub week2: Vec<String>,
    pub week3: Vec<String>,
    pub week4: Vec<String>,
}

impl ThirtyDayPlan {
    pub fn weeks(&self) -> [(&'static str, &Vec<String>); 4] {
        [
            ("week1", &self.week1),
            ("week2", &self.week2),
            ("week3", &self.week3),
            ("week4", &self.week4),
        ]
    }

    pub fn weeks_mut(&mut self) -> [&mut Vec<String>; 4] {
        [&mut self.week1, &mut self.week2, &mut self.week3, &mut self.week4]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSections {
    pub overview: String,
    pub personality_insights: String,
    pub communication_style: String,
    pub attraction_profile: String,
    pub decision_making: String,
    pub relationship_rhythm: String,
    pub growth_path: String,
}

impl NarrativeSections {
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("overview", self.overview.as_str()),
            ("personality_insights", self.personality_insights.as_str()),
            ("communication_style", self.communication_style.as_str()),
            ("attraction_profile", self.attraction_profile.as_str()),
            ("decision_making", self.decision_making.as_str()),
            ("relationship_rhythm", self.relationship_rhythm.as_str()),
            ("growth_path", self.growth_path.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBreakdown {
    pub dimension: Dimension,
    pub score: f64,
    pub pole: Pole,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleScenario {
    pub title: String,
    pub situation: String,
    pub approach: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAction {
    pub day: u8,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingContent {
    pub dimension_breakdowns: Vec<DimensionBreakdown>,
    pub example_scenarios: Vec<ExampleScenario>,
    pub seven_day_plan: Vec<DailyAction>,
    pub thirty_day_milestones: Vec<String>,
}

/// Everything the aggregator derives from a type code and its scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    pub relationship_approach: String,
    pub strengths: Vec<Strength>,
    pub growth_opportunities: Vec<GrowthOpportunity>,
    pub quick_wins: Vec<QuickWin>,
    pub thirty_day_plan: ThirtyDayPlan,
    pub narrative: NarrativeSections,
    pub supporting_content: SupportingContent,
}

/// A complete, validated individual assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualResult {
    pub type_code: TypeCode,
    pub type_name: String,
    pub scores: Scores,
    #[serde(flatten)]
    pub content: ContentBundle,
}

impl IndividualResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupleNarrative {
    pub compatibility_overview: String,
    pub communication_dynamics: String,
    pub attraction_dynamics: String,
    pub decision_dynamics: String,
    pub rhythm_dynamics: String,
    pub conflict_navigation: String,
    pub shared_growth_path: String,
}

impl CoupleNarrative {
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("compatibility_overview", self.compatibility_overview.as_str()),
            ("communication_dynamics", self.communication_dynamics.as_str()),
            ("attraction_dynamics", self.attraction_dynamics.as_str()),
            ("decision_dynamics", self.decision_dynamics.as_str()),
            ("rhythm_dynamics", self.rhythm_dynamics.as_str()),
            ("conflict_navigation", self.conflict_navigation.as_str()),
            ("shared_growth_path", self.shared_growth_path.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionComparison {
    pub dimension: Dimension,
    pub partner_a_score: f64,
    pub partner_b_score: f64,
    pub gap: f64,
    pub aligned: bool,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoupleSupportingContent {
    pub dimension_comparisons: Vec<DimensionComparison>,
    pub example_scenarios: Vec<ExampleScenario>,
    pub seven_day_plan: Vec<DailyAction>,
    pub thirty_day_milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointProfile {
    pub joint_strengths: Vec<Strength>,
    pub shared_growth_areas: Vec<GrowthOpportunity>,
    pub relationship_approach: String,
    pub joint_quick_wins: Vec<QuickWin>,
    pub joint_thirty_day_plan: ThirtyDayPlan,
    pub narrative: CoupleNarrative,
    pub supporting_content: CoupleSupportingContent,
}

/// Two individual results and their merged joint profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoupleResult {
    pub partner_a: IndividualResult,
    pub partner_b: IndividualResult,
    /// Hamming distance between the two type codes (0..=4)
    pub type_distance: usize,
    pub joint_profile: JointProfile,
}

impl CoupleResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Either result shape, for callers that validate generically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentResult {
    Individual(IndividualResult),
    Couple(CoupleResult),
}

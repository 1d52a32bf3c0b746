//! Couple profile builder: two individual results → joint profile.
//!
//! The compatibility narrative depends only on the Hamming distance
//! between the two type codes, so swapping partners changes labels and
//! ordering but never the compatibility sentence.

use attune_core::{Dimension, Pole};

use crate::aggregator::{dedup, dedup_by_key, round_robin};
use crate::config::SectionBounds;
use crate::content::{compatibility_sentence, contrast, growth_by_title, pole_content, strength_by_title, ScenarioEntry};
use crate::text::lower_first;
use crate::types::{
    CoupleNarrative, CoupleResult, CoupleSupportingContent, DailyAction, DimensionComparison, ExampleScenario,
    GrowthOpportunity, IndividualResult, JointProfile, QuickWin, Strength, ThirtyDayPlan,
};

/// Number of positions where two type codes differ
pub fn count_mismatches(a: &IndividualResult, b: &IndividualResult) -> usize {
    a.type_code.count_mismatches(&b.type_code)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn scenario(entry: &ScenarioEntry) -> ExampleScenario {
    ExampleScenario {
        title: entry.title.to_string(),
        situation: entry.situation.to_string(),
        approach: entry.approach.to_string(),
    }
}

fn joint_strength(strength: &Strength) -> Strength {
    let detail = match strength_by_title(&strength.title) {
        Some(entry) => format!("Both partners can {}.", entry.shared),
        None => format!("Both partners can draw on {} in everyday life.", lower_first(&strength.title)),
    };
    Strength {
        title: strength.title.clone(),
        detail,
    }
}

fn joint_growth(growth: &GrowthOpportunity) -> GrowthOpportunity {
    let detail = match growth_by_title(&growth.title) {
        Some(entry) => format!("Both partners can {}.", entry.shared),
        None => format!("Both partners can work on {} together.", lower_first(&growth.title)),
    };
    GrowthOpportunity {
        title: growth.title.clone(),
        detail,
        action: growth.action.clone(),
    }
}

/// Per-dimension view of the two partners
struct Pairing<'a> {
    a: &'a IndividualResult,
    b: &'a IndividualResult,
}

impl<'a> Pairing<'a> {
    fn poles(&self, dimension: Dimension) -> (Pole, Pole) {
        (self.a.type_code.pole(dimension), self.b.type_code.pole(dimension))
    }

    fn aligned(&self, dimension: Dimension) -> bool {
        let (a, b) = self.poles(dimension);
        a == b
    }

    fn aligned_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL.into_iter().filter(|d| self.aligned(*d)).collect()
    }

    fn differing_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL.into_iter().filter(|d| !self.aligned(*d)).collect()
    }

    /// Two sentences: the shared-pole description or the dimension contrast
    fn note(&self, dimension: Dimension) -> &'static str {
        let (a, _) = self.poles(dimension);
        if self.aligned(dimension) {
            pole_content(a).together
        } else {
            contrast(dimension).contrast
        }
    }

    fn dynamics(&self, dimension: Dimension) -> String {
        let (a, _) = self.poles(dimension);
        let closer = if self.aligned(dimension) {
            format!("Your shared {} lean makes this an area of natural ease.", a.name())
        } else {
            contrast(dimension).conflict_tip.to_string()
        };
        format!(
            "On {}, partner A scored {} and partner B scored {}. {} {}",
            dimension.name(),
            self.a.scores.rounded(dimension),
            self.b.scores.rounded(dimension),
            self.note(dimension),
            closer
        )
    }
}

fn join_names(dimensions: &[Dimension]) -> String {
    let names: Vec<&str> = dimensions.iter().map(|d| d.name()).collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => one.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Couple profile builder.
pub struct CoupleBuilder {
    bounds: SectionBounds,
}

impl CoupleBuilder {
    pub fn new(bounds: SectionBounds) -> Self {
        Self { bounds }
    }

    /// Merge two already-validated individual results.
    pub fn build(&self, a: &IndividualResult, b: &IndividualResult) -> CoupleResult {
        let pairing = Pairing { a, b };
        let distance = count_mismatches(a, b);

        let joint_profile = JointProfile {
            joint_strengths: self.joint_strengths(a, b),
            shared_growth_areas: self.shared_growth(a, b),
            relationship_approach: relationship_approach(a, b, distance),
            joint_quick_wins: joint_quick_wins(a, b),
            joint_thirty_day_plan: joint_plan(a, b),
            narrative: narrative(&pairing, distance),
            supporting_content: supporting_content(&pairing),
        };

        tracing::debug!(
            partner_a = %a.type_code,
            partner_b = %b.type_code,
            distance,
            "built couple profile"
        );

        CoupleResult {
            partner_a: a.clone(),
            partner_b: b.clone(),
            type_distance: distance,
            joint_profile,
        }
    }

    /// Union of both partners' strengths by title, alternating partners
    fn joint_strengths(&self, a: &IndividualResult, b: &IndividualResult) -> Vec<Strength> {
        let lists = [
            a.content.strengths.iter().map(joint_strength).collect::<Vec<_>>(),
            b.content.strengths.iter().map(joint_strength).collect::<Vec<_>>(),
        ];
        let mut strengths = dedup_by_key(round_robin(&lists), |s| s.title.clone());
        strengths.truncate(self.bounds.strengths.items.max);
        strengths
    }

    /// Union of both partners' growth areas by title, alternating partners
    fn shared_growth(&self, a: &IndividualResult, b: &IndividualResult) -> Vec<GrowthOpportunity> {
        let lists = [
            a.content.growth_opportunities.iter().map(joint_growth).collect::<Vec<_>>(),
            b.content.growth_opportunities.iter().map(joint_growth).collect::<Vec<_>>(),
        ];
        let mut growth = dedup_by_key(round_robin(&lists), |g| g.title.clone());
        growth.truncate(self.bounds.growth.items.max);
        growth
    }
}

impl Default for CoupleBuilder {
    fn default() -> Self {
        Self::new(SectionBounds::couple())
    }
}

/// Partner A's quick wins followed by partner B's; duplicates dropped,
/// nothing truncated
fn joint_quick_wins(a: &IndividualResult, b: &IndividualResult) -> Vec<QuickWin> {
    dedup(
        a.content
            .quick_wins
            .iter()
            .chain(b.content.quick_wins.iter())
            .cloned()
            .collect(),
    )
}

fn joint_plan(a: &IndividualResult, b: &IndividualResult) -> ThirtyDayPlan {
    let mut plan = ThirtyDayPlan::default();
    let a_weeks = a.content.thirty_day_plan.weeks();
    let b_weeks = b.content.thirty_day_plan.weeks();
    for (i, bucket) in plan.weeks_mut().into_iter().enumerate() {
        *bucket = dedup(a_weeks[i].1.iter().chain(b_weeks[i].1.iter()).cloned().collect());
    }
    plan
}

fn relationship_approach(a: &IndividualResult, b: &IndividualResult, distance: usize) -> String {
    format!(
        "Together, partner A as a {} and partner B as a {} approach love as a team. {} Where you align, \
         lean on what comes naturally to you both, and where you differ, treat each contrast as a chance \
         to learn from each other. The joint plan combines both of your individual action lists so \
         neither partner's growth gets lost.",
        a.type_name,
        b.type_name,
        compatibility_sentence(distance)
    )
}

fn narrative(pairing: &Pairing<'_>, distance: usize) -> CoupleNarrative {
    let (a, b) = (pairing.a, pairing.b);
    let aligned = pairing.aligned_dimensions();
    let differing = pairing.differing_dimensions();

    let alignment = if aligned.is_empty() {
        "You sit on opposite poles of every dimension, so none of your instincts can be taken for granted.".to_string()
    } else {
        format!(
            "You share the same pole on {}, which gives you common ground to build on.",
            join_names(&aligned)
        )
    };

    let compatibility_overview = format!(
        "{} ({}) and {} ({}) differ on {} of four dimensions. {} {} The sections below walk through each \
         dimension in turn.",
        a.type_code,
        a.type_name,
        b.type_code,
        b.type_name,
        distance,
        compatibility_sentence(distance),
        alignment
    );

    let conflict_navigation = if differing.is_empty() {
        "Most friction between you will come from the blind spots you share rather than from \
         misunderstanding. Because you share every pole, it helps to invite an outside perspective \
         before big decisions. When tension rises, pause, name what each of you needs, and return to \
         the conversation within a day."
            .to_string()
    } else {
        let tips: Vec<&str> = differing.iter().map(|d| contrast(*d).conflict_tip).collect();
        format!(
            "Most friction between you will come from your differences in {}. {} When tension rises, \
             pause, name what each of you needs, and return to the conversation within a day.",
            join_names(&differing),
            tips.join(" ")
        )
    };

    let growth_steps: Vec<String> = Dimension::ALL
        .iter()
        .map(|dim| {
            let (pa, pb) = pairing.poles(*dim);
            if pa == pb {
                pole_content(pa).growth_focus.to_string()
            } else {
                format!(
                    "On {}, each of you can borrow a little of the other's {} and {} instincts.",
                    dim.name(),
                    pa.name(),
                    pb.name()
                )
            }
        })
        .collect();

    let shared_growth_path = format!(
        "Your shared growth path draws on both partners' individual development areas. {} Grow together \
         by picking one area each month and supporting each other through it.",
        growth_steps.join(" ")
    );

    CoupleNarrative {
        compatibility_overview,
        communication_dynamics: pairing.dynamics(Dimension::SocialEnergy),
        attraction_dynamics: pairing.dynamics(Dimension::AttractionDriver),
        decision_dynamics: pairing.dynamics(Dimension::DecisionFilter),
        rhythm_dynamics: pairing.dynamics(Dimension::RelationshipRhythm),
        conflict_navigation,
        shared_growth_path,
    }
}

fn supporting_content(pairing: &Pairing<'_>) -> CoupleSupportingContent {
    let (a, b) = (pairing.a, pairing.b);

    let dimension_comparisons = Dimension::ALL
        .iter()
        .map(|dim| {
            let a_score = a.scores.get(*dim);
            let b_score = b.scores.get(*dim);
            DimensionComparison {
                dimension: *dim,
                partner_a_score: a_score,
                partner_b_score: b_score,
                gap: round2((a_score - b_score).abs()),
                aligned: pairing.aligned(*dim),
                note: pairing.note(*dim).to_string(),
            }
        })
        .collect();

    let example_scenarios = Dimension::ALL
        .iter()
        .map(|dim| {
            let (pa, _) = pairing.poles(*dim);
            if pairing.aligned(*dim) {
                scenario(&pole_content(pa).scenario)
            } else {
                scenario(&contrast(*dim).scenario)
            }
        })
        .collect();

    let daily = [
        a.content
            .supporting_content
            .seven_day_plan
            .iter()
            .map(|d| d.action.clone())
            .collect::<Vec<_>>(),
        b.content
            .supporting_content
            .seven_day_plan
            .iter()
            .map(|d| d.action.clone())
            .collect::<Vec<_>>(),
    ];
    let seven_day_plan = dedup(round_robin(&daily))
        .into_iter()
        .take(7)
        .enumerate()
        .map(|(i, action)| DailyAction {
            day: i as u8 + 1,
            action,
        })
        .collect();

    let thirty_day_milestones = Dimension::ALL
        .iter()
        .enumerate()
        .map(|(i, dim)| {
            let (pa, pb) = pairing.poles(*dim);
            let first = pole_content(pa).milestone;
            if pa == pb {
                format!("Week {}: {}", i + 1, first)
            } else {
                format!("Week {}: {} and {}", i + 1, first, lower_first(pole_content(pb).milestone))
            }
        })
        .collect();

    CoupleSupportingContent {
        dimension_comparisons,
        example_scenarios,
        seven_day_plan,
        thirty_day_milestones,
    }
}

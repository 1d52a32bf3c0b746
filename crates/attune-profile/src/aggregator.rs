//! Content aggregator: type code + scores → content bundle.
//!
//! Lists are flattened round-robin across the four poles (first item of
//! every pole, then the second, ...) before clipping, so every pole is
//! represented even when a list is cut at its upper bound.

use attune_core::{classify, Dimension, Scores, TypeCode};

use crate::config::SectionBounds;
use crate::content::{pole_content, PoleContent, ScenarioEntry};
use crate::types::{
    ContentBundle, DailyAction, DimensionBreakdown, ExampleScenario, GrowthOpportunity, IndividualResult,
    NarrativeSections, QuickWin, Strength, SupportingContent, ThirtyDayPlan,
};

pub const GROWTH_TIMEFRAME: &str = "7-14 days";
pub const STRENGTH_TIMEFRAME: &str = "This week";

/// Interleave per-pole lists: `[a0, b0, c0, d0, a1, b1, ...]`
pub(crate) fn round_robin<T: Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let longest = lists.iter().map(Vec::len).max().unwrap_or(0);
    (0..longest)
        .flat_map(move |i| lists.iter().filter_map(move |l| l.get(i).cloned()))
        .collect()
}

/// Drop later duplicates, keeping first-seen order
pub(crate) fn dedup_by_key<T, K: PartialEq>(items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut seen: Vec<K> = Vec::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let k = key(&item);
        if !seen.contains(&k) {
            seen.push(k);
            out.push(item);
        }
    }
    out
}

pub(crate) fn dedup<T: PartialEq + Clone>(items: Vec<T>) -> Vec<T> {
    dedup_by_key(items, |item| item.clone())
}

fn scenario(entry: &ScenarioEntry) -> ExampleScenario {
    ExampleScenario {
        title: entry.title.to_string(),
        situation: entry.situation.to_string(),
        approach: entry.approach.to_string(),
    }
}

fn strength_quick_win(strength: &Strength) -> QuickWin {
    QuickWin {
        action: format!("Leverage: {}", strength.title),
        outcome: strength.detail.clone(),
        timeframe: STRENGTH_TIMEFRAME.to_string(),
    }
}

fn growth_quick_win(growth: &GrowthOpportunity) -> QuickWin {
    QuickWin {
        action: growth.action.clone(),
        outcome: format!(
            "Eases friction around {} and builds trust through small, visible progress.",
            growth.title.to_lowercase()
        ),
        timeframe: GROWTH_TIMEFRAME.to_string(),
    }
}

/// Content aggregator for individual results.
pub struct ContentAggregator {
    bounds: SectionBounds,
}

impl ContentAggregator {
    pub fn new(bounds: SectionBounds) -> Self {
        Self { bounds }
    }

    /// Score → classify → aggregate, without validation
    pub fn build(&self, scores: &Scores) -> IndividualResult {
        let classification = classify(scores);
        let content = self.aggregate(classification.type_code, scores);
        IndividualResult {
            type_code: classification.type_code,
            type_name: classification.type_name,
            scores: *scores,
            content,
        }
    }

    /// Select and merge per-pole content for a type code.
    pub fn aggregate(&self, type_code: TypeCode, scores: &Scores) -> ContentBundle {
        let poles: Vec<&'static PoleContent> = type_code.poles().iter().map(|p| pole_content(*p)).collect();

        let strengths = self.strengths(&poles);
        let growth_opportunities = self.growth(&poles);
        let quick_wins = self.quick_wins(&strengths, &growth_opportunities);

        ContentBundle {
            relationship_approach: relationship_approach(&type_code, &poles),
            strengths,
            growth_opportunities,
            quick_wins,
            thirty_day_plan: thirty_day_plan(&poles),
            narrative: narrative(&type_code, scores, &poles),
            supporting_content: supporting_content(scores, &poles),
        }
    }

    fn strengths(&self, poles: &[&PoleContent]) -> Vec<Strength> {
        let per_pole: Vec<Vec<Strength>> = poles
            .iter()
            .map(|p| {
                p.strengths
                    .iter()
                    .map(|s| Strength {
                        title: s.title.to_string(),
                        detail: s.detail.to_string(),
                    })
                    .collect()
            })
            .collect();

        let mut strengths = dedup_by_key(round_robin(&per_pole), |s| s.title.clone());
        strengths.truncate(self.bounds.strengths.items.max);
        strengths
    }

    fn growth(&self, poles: &[&PoleContent]) -> Vec<GrowthOpportunity> {
        let per_pole: Vec<Vec<GrowthOpportunity>> = poles
            .iter()
            .map(|p| {
                p.growth
                    .iter()
                    .map(|g| GrowthOpportunity {
                        title: g.title.to_string(),
                        detail: g.detail.to_string(),
                        action: g.action.to_string(),
                    })
                    .collect()
            })
            .collect();

        let mut growth = dedup_by_key(round_robin(&per_pole), |g| g.title.clone());
        growth.truncate(self.bounds.growth.items.max);
        growth
    }

    /// One quick win per growth item and one per strength, alternating
    fn quick_wins(&self, strengths: &[Strength], growth: &[GrowthOpportunity]) -> Vec<QuickWin> {
        let lists = [
            growth.iter().map(growth_quick_win).collect::<Vec<_>>(),
            strengths.iter().map(strength_quick_win).collect::<Vec<_>>(),
        ];
        let mut wins = dedup(round_robin(&lists));
        wins.truncate(self.bounds.quick_wins.items.max);
        wins
    }
}

impl Default for ContentAggregator {
    fn default() -> Self {
        Self::new(SectionBounds::individual())
    }
}

fn pole_of(poles: &[&'static PoleContent], dimension: Dimension) -> &'static PoleContent {
    poles[dimension.index()]
}

fn join(poles: &[&PoleContent], field: impl Fn(&PoleContent) -> &'static str) -> String {
    poles.iter().map(|p| field(p)).collect::<Vec<_>>().join(" ")
}

fn relationship_approach(type_code: &TypeCode, poles: &[&PoleContent]) -> String {
    format!(
        "As a {}, you bring a recognizable approach to love. {}",
        type_code.type_name(),
        join(poles, |p| p.approach)
    )
}

fn thirty_day_plan(poles: &[&PoleContent]) -> ThirtyDayPlan {
    let mut plan = ThirtyDayPlan::default();
    for (week, bucket) in plan.weeks_mut().into_iter().enumerate() {
        *bucket = poles.iter().map(|p| p.weekly[week].to_string()).collect();
    }
    plan
}

fn dimension_section(scores: &Scores, dimension: Dimension, pole: &PoleContent, closer: &str) -> String {
    format!(
        "With a {} score of {}, you lean toward the {} pole. {} {}",
        dimension.name(),
        scores.rounded(dimension),
        pole.pole.name(),
        pole.deep,
        closer
    )
}

fn narrative(type_code: &TypeCode, scores: &Scores, poles: &[&'static PoleContent]) -> NarrativeSections {
    let name = type_code.type_name();
    let social = pole_of(poles, Dimension::SocialEnergy);
    let decision = pole_of(poles, Dimension::DecisionFilter);

    let overview = format!(
        "Your type is {code}, the {name}. You scored {se} on Social Energy, {ad} on Attraction Driver, \
         {df} on Decision Filter and {rr} on Relationship Rhythm, where 50 marks the midpoint between \
         each pair of poles. {essence} Together these tendencies shape how you meet people, fall for \
         them and build something lasting.",
        code = type_code,
        name = name,
        se = scores.rounded(Dimension::SocialEnergy),
        ad = scores.rounded(Dimension::AttractionDriver),
        df = scores.rounded(Dimension::DecisionFilter),
        rr = scores.rounded(Dimension::RelationshipRhythm),
        essence = join(poles, |p| p.essence),
    );

    let personality_insights = format!(
        "As a {}, your personality blends four distinct tendencies. {}",
        name,
        join(poles, |p| p.insight)
    );

    let communication_style = format!(
        "Your communication style is shaped most by your {} social energy and your {} decision filter. {} {}",
        social.pole.name().to_lowercase(),
        decision.pole.name().to_lowercase(),
        social.deep,
        join(poles, |p| p.communication)
    );

    let attraction_profile = dimension_section(
        scores,
        Dimension::AttractionDriver,
        pole_of(poles, Dimension::AttractionDriver),
        "This shapes who catches your eye and what keeps you interested over time.",
    );

    let decision_making = dimension_section(
        scores,
        Dimension::DecisionFilter,
        decision,
        "When you and a partner face a choice together, this is the lens you reach for first.",
    );

    let relationship_rhythm = dimension_section(
        scores,
        Dimension::RelationshipRhythm,
        pole_of(poles, Dimension::RelationshipRhythm),
        "It sets the pace you find comfortable as a relationship moves from dating to commitment.",
    );

    let growth_path = format!(
        "Every type has room to grow, and yours is no exception. {} Small, consistent steps in these \
         areas will make your natural strengths even more effective.",
        join(poles, |p| p.growth_focus)
    );

    NarrativeSections {
        overview,
        personality_insights,
        communication_style,
        attraction_profile,
        decision_making,
        relationship_rhythm,
        growth_path,
    }
}

/// Days 1-7 cycle through the poles in type-code order, first daily action
/// of each pole before any second one
pub(crate) fn seven_day_plan(poles: &[&PoleContent]) -> Vec<DailyAction> {
    let per_pole: Vec<Vec<&'static str>> = poles.iter().map(|p| p.daily.to_vec()).collect();
    round_robin(&per_pole)
        .into_iter()
        .take(7)
        .enumerate()
        .map(|(i, action)| DailyAction {
            day: i as u8 + 1,
            action: action.to_string(),
        })
        .collect()
}

fn supporting_content(scores: &Scores, poles: &[&'static PoleContent]) -> SupportingContent {
    let dimension_breakdowns = Dimension::ALL
        .iter()
        .map(|dim| {
            let pole = pole_of(poles, *dim);
            DimensionBreakdown {
                dimension: *dim,
                score: scores.get(*dim),
                pole: pole.pole,
                label: pole.label.to_string(),
                description: pole.deep.to_string(),
            }
        })
        .collect();

    let thirty_day_milestones = poles
        .iter()
        .enumerate()
        .map(|(i, p)| format!("Week {}: {}", i + 1, p.milestone))
        .collect();

    SupportingContent {
        dimension_breakdowns,
        example_scenarios: poles.iter().map(|p| scenario(&p.scenario)).collect(),
        seven_day_plan: seven_day_plan(poles),
        thirty_day_milestones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_core::Pole;

    fn code(s: &str) -> TypeCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_list_bounds() {
        let aggregator = ContentAggregator::default();
        for type_code in TypeCode::all() {
            let bundle = aggregator.aggregate(type_code, &Scores::neutral());
            assert_eq!(bundle.strengths.len(), 10);
            assert_eq!(bundle.growth_opportunities.len(), 8);
            assert_eq!(bundle.quick_wins.len(), 10);
        }
    }

    #[test]
    fn test_strengths_cover_every_pole() {
        let bundle = ContentAggregator::default().aggregate(code("FVEA"), &Scores::neutral());
        for pole in code("FVEA").poles() {
            let first = pole_content(pole).strengths[0].title;
            assert!(bundle.strengths.iter().any(|s| s.title == first), "{first}");
        }
    }

    #[test]
    fn test_quick_wins_derived() {
        let bundle = ContentAggregator::default().aggregate(code("CPLS"), &Scores::neutral());
        let first = &bundle.quick_wins[0];
        assert_eq!(first.action, bundle.growth_opportunities[0].action);
        assert_eq!(first.timeframe, GROWTH_TIMEFRAME);

        let second = &bundle.quick_wins[1];
        assert_eq!(second.action, format!("Leverage: {}", bundle.strengths[0].title));
        assert_eq!(second.outcome, bundle.strengths[0].detail);
        assert_eq!(second.timeframe, STRENGTH_TIMEFRAME);
    }

    #[test]
    fn test_clipping_respects_bounds() {
        let mut bounds = SectionBounds::individual();
        bounds.strengths.items.max = 6;
        bounds.quick_wins.items.max = 7;
        let bundle = ContentAggregator::new(bounds).aggregate(code("CPLS"), &Scores::neutral());
        assert_eq!(bundle.strengths.len(), 6);
        assert_eq!(bundle.quick_wins.len(), 7);
    }

    #[test]
    fn test_plan_is_fixed_per_type() {
        let aggregator = ContentAggregator::default();
        let a = aggregator.aggregate(code("FPES"), &Scores::new(10.0, 90.0, 20.0, 80.0));
        let b = aggregator.aggregate(code("FPES"), &Scores::new(40.0, 60.0, 45.0, 55.0));
        assert_eq!(a.thirty_day_plan, b.thirty_day_plan);
        assert_eq!(a.thirty_day_plan.week1.len(), 4);
        assert_eq!(a.thirty_day_plan.week1[0], pole_content(Pole::Focuser).weekly[0]);
    }

    #[test]
    fn test_narrative_interpolates_scores() {
        let scores = Scores::new(72.4, 31.6, 50.0, 88.0);
        let result = ContentAggregator::default().build(&scores);
        assert_eq!(result.type_code.to_string(), "CVLS");
        assert!(result.content.narrative.overview.contains("CVLS"));
        assert!(result.content.narrative.overview.contains("scored 72 on Social Energy, 32 on Attraction Driver"));
        assert!(result.content.narrative.attraction_profile.contains("score of 32"));
        assert!(result.content.relationship_approach.contains(&result.type_name));
    }

    #[test]
    fn test_supporting_content_shape() {
        let bundle = ContentAggregator::default().aggregate(code("CVEA"), &Scores::neutral());
        let support = &bundle.supporting_content;
        assert_eq!(support.dimension_breakdowns.len(), 4);
        assert_eq!(support.example_scenarios.len(), 4);
        assert_eq!(support.seven_day_plan.len(), 7);
        assert_eq!(support.seven_day_plan[6].day, 7);
        assert_eq!(support.thirty_day_milestones.len(), 4);
        assert!(support.thirty_day_milestones[0].starts_with("Week 1: "));
        assert_eq!(support.dimension_breakdowns[3].pole, Pole::Adaptive);
    }

    #[test]
    fn test_round_robin_and_dedup() {
        let lists = vec![vec![1, 2, 3], vec![4], vec![5, 6]];
        assert_eq!(round_robin(&lists), vec![1, 4, 5, 2, 6, 3]);
        assert_eq!(dedup(vec![1, 2, 1, 3, 2]), vec![1, 2, 3]);
    }
}

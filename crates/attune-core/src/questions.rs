//! Static question catalogs.
//!
//! Two banks exist: the full assessment (8 questions per dimension, 4 forced
//! choice and 4 Likert) and the snapshot (1 forced choice and 1 Likert per
//! dimension). Option A of a forced-choice item and agreement with a
//! non-reversed Likert statement both lean toward the dimension's first pole.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Raw-sum contribution ceiling of a single forced-choice item
pub const FORCED_WEIGHT: i32 = 1;
/// Raw-sum contribution ceiling of a single Likert item
pub const LIKERT_WEIGHT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    Forced {
        option_a: &'static str,
        option_b: &'static str,
    },
    Likert {
        reverse: bool,
    },
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Forced { .. } => "forced",
            QuestionKind::Likert { .. } => "likert",
        }
    }

    pub fn weight(&self) -> i32 {
        match self {
            QuestionKind::Forced { .. } => FORCED_WEIGHT,
            QuestionKind::Likert { .. } => LIKERT_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub dimension: Dimension,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

const fn forced(
    id: &'static str,
    dimension: Dimension,
    prompt: &'static str,
    option_a: &'static str,
    option_b: &'static str,
) -> Question {
    Question {
        id,
        dimension,
        prompt,
        kind: QuestionKind::Forced { option_a, option_b },
    }
}

const fn likert(id: &'static str, dimension: Dimension, prompt: &'static str, reverse: bool) -> Question {
    Question {
        id,
        dimension,
        prompt,
        kind: QuestionKind::Likert { reverse },
    }
}

use Dimension::{AttractionDriver as AD, DecisionFilter as DF, RelationshipRhythm as RR, SocialEnergy as SE};

static FULL_QUESTIONS: [Question; 32] = [
    // Social energy
    forced("se_f1", SE, "After a long week, the ideal Friday night is...",
        "A lively dinner with a group of friends", "A quiet evening with one person you trust"),
    forced("se_f2", SE, "On a first date you would rather...",
        "Go somewhere buzzing with people and music", "Find a calm spot where you can really talk"),
    forced("se_f3", SE, "When you meet someone new at a party you usually...",
        "Introduce them to everyone you know", "Settle into a long one-on-one conversation"),
    forced("se_f4", SE, "Your weekends tend to recharge you when they are...",
        "Full of plans and familiar faces", "Open and mostly unscheduled"),
    likert("se_l1", SE, "I feel energized after spending time in large social gatherings.", false),
    likert("se_l2", SE, "I enjoy introducing my partner to my wider circle of friends.", false),
    likert("se_l3", SE, "I need plenty of time alone to feel like myself again.", true),
    likert("se_l4", SE, "I prefer deep conversations with one person over group activities.", true),
    // Attraction driver
    forced("ad_f1", AD, "What catches your attention first in a potential partner?",
        "How they make you feel right now", "Where they are heading in life"),
    forced("ad_f2", AD, "A great relationship is mostly about...",
        "Enjoying each moment together", "Building a shared future"),
    forced("ad_f3", AD, "When a date goes well you think about...",
        "How much fun the evening was", "Whether your long-term goals line up"),
    forced("ad_f4", AD, "You are more drawn to someone who is...",
        "Spontaneous and playful", "Ambitious and purposeful"),
    likert("ad_l1", AD, "Chemistry in the moment matters more to me than long-term plans.", false),
    likert("ad_l2", AD, "I am attracted to people who know how to enjoy the present.", false),
    likert("ad_l3", AD, "I look for a partner whose ambitions match my own.", true),
    likert("ad_l4", AD, "I often picture what life with someone could look like in five years.", true),
    // Decision filter
    forced("df_f1", DF, "When you and a partner disagree you first...",
        "Lay out the facts on both sides", "Check in on how each of you is feeling"),
    forced("df_f2", DF, "Choosing where to live together, you weigh...",
        "Cost, commute and practical trade-offs", "Where you would both feel most at home"),
    forced("df_f3", DF, "Good advice from a partner is usually...",
        "Honest and clear, even when it stings", "Warm and supportive, even when it is vague"),
    forced("df_f4", DF, "You trust a decision more when it is...",
        "Backed by reasons you can explain", "Backed by a strong gut feeling"),
    likert("df_l1", DF, "I prefer to solve relationship problems with a clear plan.", false),
    likert("df_l2", DF, "I can set my emotions aside when a decision needs to be made.", false),
    likert("df_l3", DF, "How a choice will make people feel is my first consideration.", true),
    likert("df_l4", DF, "I often sense what my partner needs before they say it.", true),
    // Relationship rhythm
    forced("rr_f1", RR, "Your ideal relationship pace is...",
        "Clear steps and shared expectations", "Letting things unfold naturally"),
    forced("rr_f2", RR, "Planning a trip together, you prefer...",
        "A booked itinerary with room for a few surprises", "A destination and nothing else"),
    forced("rr_f3", RR, "Regular date nights feel...",
        "Reassuring and worth protecting", "A little too scheduled"),
    forced("rr_f4", RR, "When plans change at the last minute you feel...",
        "Thrown off until you can re-plan", "Curious about what happens next"),
    likert("rr_l1", RR, "I like knowing where a relationship stands at each stage.", false),
    likert("rr_l2", RR, "Shared routines make me feel close to my partner.", false),
    likert("rr_l3", RR, "I feel boxed in when a relationship follows a set timeline.", true),
    likert("rr_l4", RR, "Some of my best memories come from completely unplanned days.", true),
];

static SNAPSHOT_QUESTIONS: [Question; 8] = [
    forced("snap_se_f1", SE, "After a long week, the ideal Friday night is...",
        "A lively dinner with a group of friends", "A quiet evening with one person you trust"),
    likert("snap_se_l1", SE, "I feel energized after spending time in large social gatherings.", false),
    forced("snap_ad_f1", AD, "A great relationship is mostly about...",
        "Enjoying each moment together", "Building a shared future"),
    likert("snap_ad_l1", AD, "Chemistry in the moment matters more to me than long-term plans.", false),
    forced("snap_df_f1", DF, "When you and a partner disagree you first...",
        "Lay out the facts on both sides", "Check in on how each of you is feeling"),
    likert("snap_df_l1", DF, "I prefer to solve relationship problems with a clear plan.", false),
    forced("snap_rr_f1", RR, "Your ideal relationship pace is...",
        "Clear steps and shared expectations", "Letting things unfold naturally"),
    likert("snap_rr_l1", RR, "I like knowing where a relationship stands at each stage.", false),
];

/// Which catalog an answer set was collected against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankKind {
    Full,
    Snapshot,
}

/// A read-only question catalog.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    kind: BankKind,
    questions: &'static [Question],
}

impl QuestionBank {
    pub fn full() -> Self {
        Self {
            kind: BankKind::Full,
            questions: &FULL_QUESTIONS,
        }
    }

    pub fn snapshot() -> Self {
        Self {
            kind: BankKind::Snapshot,
            questions: &SNAPSHOT_QUESTIONS,
        }
    }

    pub fn for_kind(kind: BankKind) -> Self {
        match kind {
            BankKind::Full => Self::full(),
            BankKind::Snapshot => Self::snapshot(),
        }
    }

    pub fn kind(&self) -> BankKind {
        self.kind
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

    pub fn get(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn questions_for(&self, dimension: Dimension) -> impl Iterator<Item = &'static Question> {
        self.questions.iter().filter(move |q| q.dimension == dimension)
    }

    /// Largest absolute raw sum a dimension can reach in this bank.
    ///
    /// Scores normalize against this per-bank value (16 for the full bank,
    /// 4 for the snapshot), so both banks span the whole 0-100 range.
    pub fn max_raw(&self, dimension: Dimension) -> i32 {
        self.questions_for(dimension).map(|q| q.kind.weight()).sum()
    }
}

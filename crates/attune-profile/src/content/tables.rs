//! Static per-pole content.
//!
//! Read-only lookup data: every list and prose fragment the aggregator and
//! couple builder splice together. Strength and growth titles are unique
//! across all poles. Prose fragments are complete sentences with no
//! embedded decimal points or abbreviations, so sentence counting stays
//! exact.

use attune_core::{Dimension, Pole};

pub struct StrengthEntry {
    pub title: &'static str,
    pub detail: &'static str,
    /// Verb phrase completing "Both partners can ..."
    pub shared: &'static str,
}

pub struct GrowthEntry {
    pub title: &'static str,
    pub detail: &'static str,
    pub action: &'static str,
    /// Verb phrase completing "Both partners can ..."
    pub shared: &'static str,
}

pub struct ScenarioEntry {
    pub title: &'static str,
    pub situation: &'static str,
    pub approach: &'static str,
}

pub struct PoleContent {
    pub pole: Pole,
    /// Short label for dimension breakdowns
    pub label: &'static str,
    /// One sentence
    pub essence: &'static str,
    /// Two sentences
    pub insight: &'static str,
    /// One sentence
    pub communication: &'static str,
    /// Two sentences, used for the pole's own dimension section
    pub deep: &'static str,
    /// One sentence
    pub approach: &'static str,
    /// One sentence
    pub growth_focus: &'static str,
    pub strengths: [StrengthEntry; 3],
    pub growth: [GrowthEntry; 2],
    /// One action per week of the 30-day plan
    pub weekly: [&'static str; 4],
    pub daily: [&'static str; 2],
    pub milestone: &'static str,
    pub scenario: ScenarioEntry,
    /// Two sentences describing two partners who share this pole
    pub together: &'static str,
}

/// What two partners on opposite poles of a dimension experience
pub struct DimensionContrast {
    pub dimension: Dimension,
    /// Two sentences
    pub contrast: &'static str,
    /// One sentence
    pub conflict_tip: &'static str,
    pub scenario: ScenarioEntry,
}

/// Compatibility sentence per type-code Hamming distance (0..=4)
pub const COMPATIBILITY: [&str; 5] = [
    "You share the same type, so you understand each other's instincts almost without words, and your main task is to stretch beyond the habits you have in common.",
    "Your types differ in a single letter, which gives you a strong common foundation with just enough contrast to keep each other curious.",
    "Your types differ in two letters, a balanced mix of shared ground and complementary strengths that rewards deliberate conversation.",
    "Your types differ in three letters, so you bring genuinely different instincts to the relationship and can cover each other's blind spots when you stay patient.",
    "Your types are fully opposite, which can feel like magnetic attraction and real friction at the same time, and thrives on curiosity about how the other person sees the world.",
];

static POLES: [PoleContent; 8] = [
    PoleContent {
        pole: Pole::Connector,
        label: "Energized by people",
        essence: "You draw energy from shared experiences and feel most alive when your relationship is woven into a wider circle of friends.",
        insight: "You notice the mood of a room quickly and enjoy bringing people together. Your warmth is often the first thing a partner falls for.",
        communication: "You process out loud, think best in conversation and appreciate a partner who answers with the same openness.",
        deep: "Social time is fuel for you rather than a drain, and a quiet week can leave you restless. You show love by including your partner in the people and places that matter to you.",
        approach: "You build closeness through shared adventures, introductions and a steady stream of conversation.",
        growth_focus: "Your next step is learning to value quiet, unstructured time together as much as the busy, social moments.",
        strengths: [
            StrengthEntry {
                title: "Social warmth",
                detail: "Makes new people feel welcome and included within minutes of meeting them.",
                shared: "draw each other into a wider, warmer circle of friends",
            },
            StrengthEntry {
                title: "Open expression",
                detail: "Shares thoughts and feelings readily, so a partner rarely has to guess what is going on.",
                shared: "say what they feel early instead of letting it build up",
            },
            StrengthEntry {
                title: "Shared adventure",
                detail: "Turns ordinary weekends into memorable outings that a couple can talk about for years.",
                shared: "plan outings that turn ordinary weekends into shared stories",
            },
        ],
        growth: [
            GrowthEntry {
                title: "Comfort with quiet",
                detail: "Long stretches without plans can feel like distance even when a partner simply needs rest.",
                action: "Schedule one unplanned evening at home and notice how connection shows up without an agenda.",
                shared: "treat quiet evenings at home as connection rather than distance",
            },
            GrowthEntry {
                title: "Listening space",
                detail: "Enthusiasm can fill the silence before a quieter partner has finished forming a thought.",
                action: "Pause for a full breath after your partner speaks before you reply.",
                shared: "leave a full pause before replying so both voices get room",
            },
        ],
        weekly: [
            "Introduce your partner to one friend they have not met yet.",
            "Host a relaxed dinner and ask your partner to choose the guests.",
            "Plan a group outing and check in afterward about how it felt for both of you.",
            "Spend one social evening as a pair and compare it with a group night.",
        ],
        daily: [
            "Send your partner a message about something fun you want to share this week.",
            "Ask your partner which social plan this month they are most looking forward to.",
        ],
        milestone: "Bring each other further into your social worlds",
        scenario: ScenarioEntry {
            title: "The packed weekend",
            situation: "You have said yes to three invitations this weekend and your partner looks tired when you mention them.",
            approach: "Pick the one event that matters most, ask which one your partner would enjoy, and turn the rest into a quiet night in.",
        },
        together: "You both come alive around other people, so your relationship naturally has a busy social calendar. Protect a little time that belongs only to the two of you.",
    },
    PoleContent {
        pole: Pole::Focuser,
        label: "Energized by depth",
        essence: "You recharge in calm, focused time and feel closest to a partner in long, uninterrupted one-on-one conversations.",
        insight: "You notice details others miss and prefer depth over breadth in your friendships. Partners often describe you as steady and deeply attentive.",
        communication: "You think before you speak, choose words carefully and value a partner who gives you space to finish a thought.",
        deep: "Busy social calendars drain you faster than most people realize, and solitude is how you reset. You show love through undivided attention and remembering the small things a partner once said.",
        approach: "You build closeness slowly and deliberately through trust, privacy and meaningful conversation.",
        growth_focus: "Your next step is letting your partner into your inner world sooner and joining their social life now and then.",
        strengths: [
            StrengthEntry {
                title: "Deep attention",
                detail: "Listens closely and remembers the details that make a partner feel truly seen.",
                shared: "give each other undivided attention when it matters most",
            },
            StrengthEntry {
                title: "Calm presence",
                detail: "Brings a steady, grounded energy that helps a relationship feel safe and unhurried.",
                shared: "slow things down and make home feel calm and safe",
            },
            StrengthEntry {
                title: "Loyal focus",
                detail: "Invests fully in a small number of relationships and keeps showing up for them.",
                shared: "invest deeply in the relationship instead of spreading energy thin",
            },
        ],
        growth: [
            GrowthEntry {
                title: "Sharing sooner",
                detail: "Feelings are often processed privately for days before a partner hears about them.",
                action: "Name one feeling to your partner on the day you notice it, even if it is unfinished.",
                shared: "share unfinished feelings early rather than processing them alone",
            },
            GrowthEntry {
                title: "Social stretch",
                detail: "Declining group plans too often can leave a more social partner feeling alone.",
                action: "Join one social plan your partner cares about and agree on a comfortable time to leave.",
                shared: "meet halfway on social plans with a clear and kind exit time",
            },
        ],
        weekly: [
            "Set aside one phone-free hour for a long conversation with your partner.",
            "Share one personal story your partner has not heard before.",
            "Join one social plan your partner enjoys and agree on a leaving time in advance.",
            "Tell your partner what kind of alone time helps you recharge best.",
        ],
        daily: [
            "Ask your partner one open question and listen without planning your reply.",
            "Tell your partner one thing you appreciated about them today.",
        ],
        milestone: "Open up your inner world a little sooner",
        scenario: ScenarioEntry {
            title: "The big party invite",
            situation: "Your partner is excited about a large party and you already feel tired thinking about it.",
            approach: "Say yes to part of the evening, agree on a signal for leaving, and plan a quiet morning together afterward.",
        },
        together: "You both treasure quiet time and deep conversation, so your home can feel like a calm retreat. Make sure the relationship still gets fresh air through friends and new experiences.",
    },
    PoleContent {
        pole: Pole::Present,
        label: "Drawn to the moment",
        essence: "You are drawn to chemistry, fun and the way someone makes you feel right now.",
        insight: "You bring playfulness and spontaneity into relationships and rarely let a good moment pass unnoticed. Partners feel the spark with you quickly.",
        communication: "You keep conversations light and lively, and you prefer talking about what you can enjoy together soon.",
        deep: "Attraction for you is about presence, humor and shared experiences rather than a checklist of future plans. You keep romance alive by noticing what feels good today and doing more of it.",
        approach: "You approach love as something to enjoy and savor, trusting that good moments add up to a good relationship.",
        growth_focus: "Your next step is pairing your love of the moment with a few shared plans for where the relationship is heading.",
        strengths: [
            StrengthEntry {
                title: "Playful spark",
                detail: "Keeps romance fresh with humor, spontaneity and small surprises.",
                shared: "keep romance playful with humor and small surprises",
            },
            StrengthEntry {
                title: "In-the-moment joy",
                detail: "Notices and savors good moments instead of rushing past them.",
                shared: "pause to savor good moments together before rushing on",
            },
            StrengthEntry {
                title: "Easy chemistry",
                detail: "Creates a relaxed, fun atmosphere that makes a partner feel attractive and wanted.",
                shared: "make each other feel wanted through easy, relaxed affection",
            },
        ],
        growth: [
            GrowthEntry {
                title: "Future conversations",
                detail: "Avoiding talk about long-term plans can leave a partner unsure where things are going.",
                action: "Share one hope you have for the relationship a year from now.",
                shared: "talk openly about where the relationship is heading",
            },
            GrowthEntry {
                title: "Follow-through",
                detail: "Exciting ideas sometimes fade once the initial spark of planning wears off.",
                action: "Pick one plan you made together and put a date on it this week.",
                shared: "turn exciting ideas into plans with real dates",
            },
        ],
        weekly: [
            "Plan one spontaneous date with no agenda beyond having fun.",
            "Share one hope you have for where the relationship will be next year.",
            "Revisit an idea you both got excited about and put a date on it.",
            "Mix one playful date with a short conversation about shared goals.",
        ],
        daily: [
            "Surprise your partner with a small gesture that made you think of them.",
            "Take five minutes to enjoy a simple moment together without phones.",
        ],
        milestone: "Pair playful moments with a shared sense of direction",
        scenario: ScenarioEntry {
            title: "The five-year question",
            situation: "Your partner asks where you see the relationship in five years and you feel put on the spot.",
            approach: "Share one honest hope, ask what they imagine, and agree to keep the conversation going over a relaxed dinner.",
        },
        together: "You both love the spark of the moment, which keeps your relationship fun and affectionate. Check in now and then about the future so the good times keep building on each other.",
    },
    PoleContent {
        pole: Pole::Visionary,
        label: "Drawn to the future",
        essence: "You are drawn to purpose, ambition and the shared future a relationship can build.",
        insight: "You see potential in people and picture where a relationship could go. Partners feel taken seriously and invested in by you.",
        communication: "You like conversations about goals, values and plans, and you listen for where a partner wants to grow.",
        deep: "Attraction for you grows from shared values and a sense of direction rather than fleeting chemistry. You show love by making room for a partner in your plans and supporting their ambitions.",
        approach: "You approach love as a partnership with a shared horizon, building steadily toward goals you both care about.",
        growth_focus: "Your next step is slowing down to enjoy the relationship as it is today, not only as it could become.",
        strengths: [
            StrengthEntry {
                title: "Shared purpose",
                detail: "Builds a clear sense of where the relationship is heading and why it matters.",
                shared: "build toward goals that give the relationship a clear direction",
            },
            StrengthEntry {
                title: "Long-range commitment",
                detail: "Invests in a partner's growth and stays committed through difficult seasons.",
                shared: "stay committed through hard seasons with the long view in mind",
            },
            StrengthEntry {
                title: "Encouraging ambition",
                detail: "Champions a partner's goals and helps turn dreams into realistic steps.",
                shared: "champion each other's ambitions and celebrate real progress",
            },
        ],
        growth: [
            GrowthEntry {
                title: "Savoring today",
                detail: "Focusing on what comes next can make the present relationship feel like a project.",
                action: "Plan one date with no goal other than enjoying each other's company.",
                shared: "enjoy the relationship as it is today without a goal attached",
            },
            GrowthEntry {
                title: "Flexible expectations",
                detail: "A detailed picture of the future can make a partner feel measured against a plan.",
                action: "Ask your partner which part of your shared plans feels most exciting to them.",
                shared: "hold future plans loosely enough for both people to shape them",
            },
        ],
        weekly: [
            "Share one long-term dream with your partner and ask about theirs.",
            "Plan one date with no purpose other than enjoying each other.",
            "Agree on one small shared goal for the coming month.",
            "Celebrate one step either of you took toward a personal goal.",
        ],
        daily: [
            "Ask your partner about one goal they are working on right now.",
            "Notice one moment today that you enjoyed just as it was.",
        ],
        milestone: "Enjoy today while shaping the future together",
        scenario: ScenarioEntry {
            title: "The spontaneous weekend",
            situation: "Your partner suggests dropping everything for a spontaneous weekend away and you feel the pull of your plans.",
            approach: "Say yes to a shorter version, leave the laptop behind, and let the trip be about the two of you.",
        },
        together: "You both think in terms of a shared future, so you build plans and momentum quickly. Remember to enjoy the relationship you already have while you work toward the one you want.",
    },
    PoleContent {
        pole: Pole::Logic,
        label: "Guided by reason",
        essence: "You make decisions by weighing facts, trade-offs and what makes practical sense.",
        insight: "You stay clear-headed when emotions run high and help a partner see problems from every angle. Partners trust your honesty and fairness.",
        communication: "You value directness and clear reasons, and you prefer solving a problem over circling around it.",
        deep: "You filter choices through logic, fairness and consistency, which makes you a dependable partner in big decisions. You show care by solving problems and making life easier for the person you love.",
        approach: "You approach relationships with honesty and fairness, aiming for agreements that make sense for both people.",
        growth_focus: "Your next step is acknowledging feelings before jumping to solutions, especially when your partner is upset.",
        strengths: [
            StrengthEntry {
                title: "Clear thinking",
                detail: "Stays calm and rational when a partner needs a steady head in a crisis.",
                shared: "stay clear-headed together when a decision gets stressful",
            },
            StrengthEntry {
                title: "Honest feedback",
                detail: "Says what is true with care, so a partner always knows where they stand.",
                shared: "give each other honest feedback delivered with care",
            },
            StrengthEntry {
                title: "Practical problem solving",
                detail: "Breaks relationship challenges into concrete steps that actually get done.",
                shared: "turn relationship challenges into concrete steps that get done",
            },
        ],
        growth: [
            GrowthEntry {
                title: "Feelings first",
                detail: "Jumping to solutions can leave a partner feeling unheard in emotional moments.",
                action: "When your partner is upset, reflect their feeling back before offering any advice.",
                shared: "name the feeling first before trying to fix the problem",
            },
            GrowthEntry {
                title: "Softer delivery",
                detail: "Direct honesty can land harder than intended when a partner feels vulnerable.",
                action: "Start one piece of feedback this week with something you appreciate.",
                shared: "soften hard truths with appreciation and warmth",
            },
        ],
        weekly: [
            "Ask your partner how they feel about one decision before discussing options.",
            "Start one piece of feedback with something you appreciate.",
            "Solve one practical household problem together and celebrate it.",
            "Share one feeling behind a recent decision you made.",
        ],
        daily: [
            "Reflect one of your partner's feelings back to them before responding.",
            "Tell your partner one reason you trust their judgment.",
        ],
        milestone: "Lead with empathy before solutions",
        scenario: ScenarioEntry {
            title: "The bad day",
            situation: "Your partner comes home upset about work and you immediately see three ways to fix the problem.",
            approach: "Hold the solutions, ask what the day felt like, and offer ideas only if your partner asks for them.",
        },
        together: "You both value reason and fairness, so disagreements tend to stay calm and productive. Make room for feelings too, even when they do not fit neatly into an argument.",
    },
    PoleContent {
        pole: Pole::Empathy,
        label: "Guided by feeling",
        essence: "You make decisions by tuning into feelings, values and how a choice will affect the people you love.",
        insight: "You sense emotional undercurrents quickly and respond with warmth and care. Partners feel understood and emotionally safe with you.",
        communication: "You listen for feelings beneath the words and prefer gentle, supportive conversations over blunt debate.",
        deep: "You filter choices through compassion and personal values, which makes a relationship feel emotionally rich. You show love by anticipating needs and making a partner feel cared for.",
        approach: "You approach relationships with warmth and emotional attunement, putting connection ahead of being right.",
        growth_focus: "Your next step is voicing your own needs as clearly as you honor your partner's.",
        strengths: [
            StrengthEntry {
                title: "Emotional attunement",
                detail: "Picks up on a partner's mood quickly and responds with genuine care.",
                shared: "notice each other's moods early and respond with care",
            },
            StrengthEntry {
                title: "Generous support",
                detail: "Makes a partner feel backed and encouraged through every kind of challenge.",
                shared: "back each other up generously when life gets hard",
            },
            StrengthEntry {
                title: "Values-driven care",
                detail: "Keeps the relationship anchored in kindness, respect and shared values.",
                shared: "keep the relationship anchored in kindness and shared values",
            },
        ],
        growth: [
            GrowthEntry {
                title: "Voicing needs",
                detail: "Putting a partner first can mean your own needs go unspoken for too long.",
                action: "Tell your partner one thing you need this week in a single clear sentence.",
                shared: "state their own needs as clearly as they meet each other's",
            },
            GrowthEntry {
                title: "Healthy disagreement",
                detail: "Avoiding conflict to keep the peace can let small issues quietly grow.",
                action: "Raise one small disagreement calmly instead of letting it pass.",
                shared: "raise small disagreements early instead of keeping the peace",
            },
        ],
        weekly: [
            "Tell your partner one thing you need this week in a single clear sentence.",
            "Raise one small disagreement calmly instead of letting it pass.",
            "Do one caring gesture for yourself and tell your partner about it.",
            "Ask your partner for their honest view on a decision you are weighing.",
        ],
        daily: [
            "Name one of your own feelings out loud to your partner.",
            "Thank your partner for one way they supported you recently.",
        ],
        milestone: "Speak up for your own needs",
        scenario: ScenarioEntry {
            title: "The quiet resentment",
            situation: "You keep agreeing to your partner's plans and notice a small resentment building.",
            approach: "Share the feeling early and kindly, name what you would like instead, and invite your partner to find a middle ground.",
        },
        together: "You both lead with feeling, so your relationship is warm, affectionate and emotionally safe. Make sure practical decisions still get made on time, even when they feel uncomfortable.",
    },
    PoleContent {
        pole: Pole::Structured,
        label: "Steadied by structure",
        essence: "You feel secure when a relationship has clear expectations, reliable routines and visible progress.",
        insight: "You are dependable and intentional, and you keep your promises. Partners know they can count on you.",
        communication: "You like to agree on plans, check in regularly and know where things stand.",
        deep: "Clear steps and shared routines help you relax into a relationship and feel close. You show love by being reliable, planning thoughtful dates and following through on commitments.",
        approach: "You approach relationships intentionally, building trust through consistency and clear agreements.",
        growth_focus: "Your next step is embracing a little unpredictability and trusting the relationship when plans change.",
        strengths: [
            StrengthEntry {
                title: "Dependable follow-through",
                detail: "Keeps promises and makes a partner feel secure through consistent actions.",
                shared: "keep promises to each other and build trust through consistency",
            },
            StrengthEntry {
                title: "Thoughtful planning",
                detail: "Plans dates and shared time carefully so important moments are never forgotten.",
                shared: "plan meaningful time together so it never gets crowded out",
            },
            StrengthEntry {
                title: "Clear agreements",
                detail: "Creates shared expectations that prevent misunderstandings before they start.",
                shared: "agree on expectations early and prevent misunderstandings",
            },
        ],
        growth: [
            GrowthEntry {
                title: "Embracing surprise",
                detail: "Last-minute changes can feel unsettling even when they lead somewhere good.",
                action: "Let your partner plan one surprise outing and go along without asking for details.",
                shared: "welcome surprises and last-minute changes with curiosity",
            },
            GrowthEntry {
                title: "Loosening timelines",
                detail: "Expecting milestones on a schedule can put pressure on a partner who moves differently.",
                action: "Ask your partner how they feel about the pace of the relationship right now.",
                shared: "let the relationship move at a pace both people enjoy",
            },
        ],
        weekly: [
            "Set up a weekly check-in time and protect it on the calendar.",
            "Let your partner plan one surprise outing without asking for details.",
            "Review one shared routine and ask whether it still works for both of you.",
            "Leave one evening completely unplanned and see where it goes.",
        ],
        daily: [
            "Confirm one plan with your partner and thank them for showing up for it.",
            "Say yes to one small spontaneous suggestion from your partner.",
        ],
        milestone: "Build steady routines with room for surprise",
        scenario: ScenarioEntry {
            title: "The cancelled plan",
            situation: "Your carefully planned dinner falls through an hour before and your partner suggests improvising.",
            approach: "Take a breath, name the disappointment briefly, and let your partner lead the backup plan.",
        },
        together: "You both value reliability and clear plans, so your relationship runs smoothly and feels secure. Leave some room for spontaneity so routine never replaces romance.",
    },
    PoleContent {
        pole: Pole::Adaptive,
        label: "Steadied by flexibility",
        essence: "You feel most at ease when a relationship can unfold naturally, without rigid timelines or scripts.",
        insight: "You adapt quickly and bring a sense of freedom and discovery into relationships. Partners enjoy your openness to whatever comes next.",
        communication: "You prefer conversations that flow naturally and feel boxed in by formal check-ins.",
        deep: "Flexibility helps you stay relaxed and genuine, and too much structure can feel like pressure. You show love by being present, adaptable and ready to say yes to new experiences.",
        approach: "You approach relationships with openness and trust, letting closeness grow at its own natural pace.",
        growth_focus: "Your next step is offering a partner enough consistency and clarity to feel secure alongside your freedom.",
        strengths: [
            StrengthEntry {
                title: "Easygoing flexibility",
                detail: "Rolls with changes gracefully and keeps small setbacks from becoming big problems.",
                shared: "roll with changes together without letting setbacks grow",
            },
            StrengthEntry {
                title: "Openness to discovery",
                detail: "Brings curiosity and a sense of adventure into everyday life as a couple.",
                shared: "stay curious and discover new things as a couple",
            },
            StrengthEntry {
                title: "Relaxed presence",
                detail: "Keeps the relationship light and pressure-free so both people can be themselves.",
                shared: "keep the relationship relaxed enough for both people to be themselves",
            },
        ],
        growth: [
            GrowthEntry {
                title: "Reliable signals",
                detail: "Keeping plans loose can leave a partner unsure whether you are fully committed.",
                action: "Confirm one plan with your partner a day ahead and follow through exactly.",
                shared: "give each other clear, reliable signals of commitment",
            },
            GrowthEntry {
                title: "Defining the relationship",
                detail: "Avoiding conversations about labels or next steps can create quiet anxiety for a partner.",
                action: "Ask your partner what would help them feel secure about where you stand.",
                shared: "talk openly about labels and next steps when either one asks",
            },
        ],
        weekly: [
            "Confirm one plan a day ahead and follow through exactly as agreed.",
            "Ask your partner what would help them feel more secure right now.",
            "Start one small shared ritual you can keep for the rest of the month.",
            "Try a new activity together that neither of you has done before.",
        ],
        daily: [
            "Send your partner a quick update about your day without being asked.",
            "Follow through on one small promise exactly as you said you would.",
        ],
        milestone: "Offer steady signals while keeping your freedom",
        scenario: ScenarioEntry {
            title: "The calendar request",
            situation: "Your partner asks to plan the next three weekends in advance and you feel a familiar urge to keep things open.",
            approach: "Commit to one weekend plan, leave the others flexible, and explain that the open time matters to you.",
        },
        together: "You both enjoy freedom and spontaneity, so your relationship feels light and full of discovery. A few shared rituals can give that freedom a secure home base.",
    },
];

static CONTRASTS: [DimensionContrast; 4] = [
    DimensionContrast {
        dimension: Dimension::SocialEnergy,
        contrast: "One of you recharges in company while the other recharges in quiet. Agreeing on a weekly balance of social plans and home time keeps both batteries full.",
        conflict_tip: "When social plans cause friction, agree on arrival and leaving times before the event rather than during it.",
        scenario: ScenarioEntry {
            title: "Friday night split",
            situation: "One partner wants a night out with friends while the other hoped for a quiet evening at home.",
            approach: "Alternate weeks, or go out early and come home together for a calm late evening.",
        },
    },
    DimensionContrast {
        dimension: Dimension::AttractionDriver,
        contrast: "One of you lives for the spark of the moment while the other keeps an eye on the shared future. Together you can enjoy today without losing sight of where you are heading.",
        conflict_tip: "When talk of the future feels heavy, pair it with something fun so neither partner dreads the conversation.",
        scenario: ScenarioEntry {
            title: "Plans versus play",
            situation: "One partner wants to talk about moving in together while the other just wants to enjoy the weekend.",
            approach: "Set a relaxed time for the big conversation and keep the weekend itself light and playful.",
        },
    },
    DimensionContrast {
        dimension: Dimension::DecisionFilter,
        contrast: "One of you decides with logic while the other decides with feeling. The best choices you make together will honor both the facts and the emotions involved.",
        conflict_tip: "In disagreements, let the feeling-led partner share emotions first, then let the logic-led partner lay out options.",
        scenario: ScenarioEntry {
            title: "The big purchase",
            situation: "One partner has a spreadsheet comparing options while the other has a strong gut feeling about one choice.",
            approach: "Review the numbers together, then ask how each option feels, and decide only when both views are heard.",
        },
    },
    DimensionContrast {
        dimension: Dimension::RelationshipRhythm,
        contrast: "One of you likes clear plans and milestones while the other prefers to let things unfold. A few agreed anchors with open space between them can satisfy you both.",
        conflict_tip: "When pace becomes a sore point, agree on which plans are fixed and which can stay flexible.",
        scenario: ScenarioEntry {
            title: "The holiday itinerary",
            situation: "One partner has booked every day of a trip while the other wants to wander and see what happens.",
            approach: "Keep two booked highlights, leave the remaining days open, and let the flexible partner lead one of them.",
        },
    },
];

pub fn pole_content(pole: Pole) -> &'static PoleContent {
    let index = Pole::ALL.iter().position(|p| *p == pole).unwrap_or(0);
    &POLES[index]
}

pub fn contrast(dimension: Dimension) -> &'static DimensionContrast {
    &CONTRASTS[dimension.index()]
}

pub fn compatibility_sentence(distance: usize) -> &'static str {
    COMPATIBILITY[distance.min(COMPATIBILITY.len() - 1)]
}

pub fn strength_by_title(title: &str) -> Option<&'static StrengthEntry> {
    POLES
        .iter()
        .flat_map(|p| p.strengths.iter())
        .find(|s| s.title == title)
}

pub fn growth_by_title(title: &str) -> Option<&'static GrowthEntry> {
    POLES
        .iter()
        .flat_map(|p| p.growth.iter())
        .find(|g| g.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{sentence_count, word_count};
    use std::collections::HashSet;

    #[test]
    fn test_table_order_matches_poles() {
        for pole in Pole::ALL {
            assert_eq!(pole_content(pole).pole, pole);
        }
        for dim in Dimension::ALL {
            assert_eq!(contrast(dim).dimension, dim);
        }
    }

    #[test]
    fn test_titles_unique() {
        let strengths: HashSet<_> = POLES.iter().flat_map(|p| p.strengths.iter().map(|s| s.title)).collect();
        let growth: HashSet<_> = POLES.iter().flat_map(|p| p.growth.iter().map(|g| g.title)).collect();
        assert_eq!(strengths.len(), 24);
        assert_eq!(growth.len(), 16);
    }

    #[test]
    fn test_fragment_sentence_shape() {
        for p in &POLES {
            assert_eq!(sentence_count(p.essence), 1, "{:?} essence", p.pole);
            assert_eq!(sentence_count(p.insight), 2, "{:?} insight", p.pole);
            assert_eq!(sentence_count(p.communication), 1, "{:?} communication", p.pole);
            assert_eq!(sentence_count(p.deep), 2, "{:?} deep", p.pole);
            assert_eq!(sentence_count(p.approach), 1, "{:?} approach", p.pole);
            assert_eq!(sentence_count(p.growth_focus), 1, "{:?} growth_focus", p.pole);
            assert_eq!(sentence_count(p.together), 2, "{:?} together", p.pole);
        }
        for c in &CONTRASTS {
            assert_eq!(sentence_count(c.contrast), 2);
            assert_eq!(sentence_count(c.conflict_tip), 1);
        }
        for s in COMPATIBILITY {
            assert_eq!(sentence_count(s), 1);
            assert!(word_count(s) >= 15);
        }
    }

    #[test]
    fn test_lookup_by_title() {
        assert_eq!(strength_by_title("Calm presence").map(|s| s.title), Some("Calm presence"));
        assert!(growth_by_title("Voicing needs").is_some());
        assert!(strength_by_title("Nonexistent").is_none());
    }

    #[test]
    fn test_compatibility_clamps() {
        assert_eq!(compatibility_sentence(9), COMPATIBILITY[4]);
    }
}

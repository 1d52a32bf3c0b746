//! Engine configuration and content bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    pub fn contains(&self, value: usize) -> bool {
        value >= self.min && value <= self.max
    }

    /// Widen the upper bound by `factor`
    pub fn scaled_max(&self, factor: usize) -> Self {
        Self {
            min: self.min,
            max: self.max * factor,
        }
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "exactly {}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Word and sentence bounds for one prose field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProseBounds {
    pub words: CountRange,
    pub sentences: CountRange,
}

/// Item count and optional aggregate word count for one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBounds {
    pub items: CountRange,
    pub total_words: Option<CountRange>,
}

impl ListBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self {
            items: CountRange::new(min, max),
            total_words: None,
        }
    }

    pub const fn with_words(mut self, min: usize, max: usize) -> Self {
        self.total_words = Some(CountRange::new(min, max));
        self
    }
}

/// Bounds for every validated section of one result shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub strengths: ListBounds,
    pub growth: ListBounds,
    pub quick_wins: ListBounds,
    /// Applied to each week of the 30-day plan
    pub plan_week: ListBounds,
    pub narrative: ProseBounds,
    pub relationship_approach: ProseBounds,
    pub breakdowns: ListBounds,
    pub scenarios: ListBounds,
    pub seven_day_plan: ListBounds,
    pub milestones: ListBounds,
    /// Words in a title
    pub title_words: CountRange,
    /// Words in any other list entry (details, actions, outcomes)
    pub entry_words: CountRange,
}

impl SectionBounds {
    pub fn individual() -> Self {
        Self {
            strengths: ListBounds::new(3, 10).with_words(30, 400),
            growth: ListBounds::new(3, 8).with_words(30, 400),
            quick_wins: ListBounds::new(3, 10).with_words(30, 500),
            plan_week: ListBounds::new(1, 6),
            narrative: ProseBounds {
                words: CountRange::new(40, 320),
                sentences: CountRange::new(3, 16),
            },
            relationship_approach: ProseBounds {
                words: CountRange::new(30, 220),
                sentences: CountRange::new(2, 10),
            },
            breakdowns: ListBounds::new(4, 4),
            scenarios: ListBounds::new(2, 6),
            seven_day_plan: ListBounds::new(7, 7),
            milestones: ListBounds::new(4, 4),
            title_words: CountRange::new(1, 8),
            entry_words: CountRange::new(3, 45),
        }
    }

    /// Couple-level bounds. Joint quick wins and plan weeks are the
    /// concatenation of both partners' lists and are never truncated, so
    /// their upper bounds are twice the individual ones.
    pub fn couple() -> Self {
        let individual = Self::individual();
        Self {
            strengths: ListBounds::new(3, 10).with_words(30, 500),
            growth: ListBounds::new(3, 8).with_words(30, 500),
            quick_wins: ListBounds {
                items: individual.quick_wins.items.scaled_max(2),
                total_words: Some(CountRange::new(30, 1000)),
            },
            plan_week: ListBounds {
                items: individual.plan_week.items.scaled_max(2),
                total_words: None,
            },
            narrative: ProseBounds {
                words: CountRange::new(40, 400),
                sentences: CountRange::new(3, 20),
            },
            relationship_approach: ProseBounds {
                words: CountRange::new(30, 260),
                sentences: CountRange::new(2, 12),
            },
            breakdowns: ListBounds::new(4, 4),
            scenarios: ListBounds::new(2, 8),
            seven_day_plan: ListBounds::new(7, 7),
            milestones: ListBounds::new(4, 4),
            title_words: CountRange::new(1, 8),
            entry_words: CountRange::new(3, 60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBounds {
    pub individual: SectionBounds,
    pub couple: SectionBounds,
}

impl Default for ContentBounds {
    fn default() -> Self {
        Self {
            individual: SectionBounds::individual(),
            couple: SectionBounds::couple(),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject answer sets that leave questions unanswered instead of
    /// scoring the gaps as neutral
    pub require_complete_answers: bool,

    /// Validator bounds
    pub bounds: ContentBounds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            require_complete_answers: false,
            bounds: ContentBounds::default(),
        }
    }
}

impl EngineConfig {
    fn environment() -> config::Environment {
        config::Environment::with_prefix("ATTUNE")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration from file, layered over defaults and under
    /// `ATTUNE__`-separated environment overrides
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::with_name(path))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::{env, fs};

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(!config.require_complete_answers);
        assert_eq!(config.bounds.individual.strengths.items, CountRange::new(3, 10));
        assert_eq!(config.bounds.individual.growth.items, CountRange::new(3, 8));
    }

    #[test]
    fn test_couple_concatenation_bounds() {
        let bounds = ContentBounds::default();
        assert_eq!(
            bounds.couple.quick_wins.items.max,
            bounds.individual.quick_wins.items.max * 2
        );
        assert_eq!(
            bounds.couple.plan_week.items.max,
            bounds.individual.plan_week.items.max * 2
        );
    }

    #[test]
    fn test_range_display() {
        assert_eq!(CountRange::new(3, 10).to_string(), "3-10");
        assert_eq!(CountRange::exactly(7).to_string(), "exactly 7");
    }

    /// Serializes tests that touch `ATTUNE__*` variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const REQUIRE_COMPLETE_VAR: &str = "ATTUNE__REQUIRE_COMPLETE_ANSWERS";

    #[test]
    fn test_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var(REQUIRE_COMPLETE_VAR);

        let config = EngineConfig::from_env().unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.bounds.individual.plan_week.total_words.is_none());
        assert_eq!(
            config.bounds.couple.quick_wins.total_words,
            Some(CountRange::new(30, 1000))
        );
    }

    #[test]
    fn test_from_env_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var(REQUIRE_COMPLETE_VAR, "true");

        let config = EngineConfig::from_env();
        env::remove_var(REQUIRE_COMPLETE_VAR);

        let config = config.unwrap();
        assert!(config.require_complete_answers);
        assert_eq!(config.bounds, ContentBounds::default());
    }

    #[test]
    fn test_from_file_layers_over_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var(REQUIRE_COMPLETE_VAR);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attune.toml");
        fs::write(
            &path,
            "require_complete_answers = true\n\n[bounds.individual.strengths.items]\nmin = 4\nmax = 9\n",
        )
        .unwrap();

        let config = EngineConfig::from_file(path.to_str().unwrap()).unwrap();
        assert!(config.require_complete_answers);
        assert_eq!(config.bounds.individual.strengths.items, CountRange::new(4, 9));
        assert_eq!(
            config.bounds.individual.strengths.total_words,
            Some(CountRange::new(30, 400))
        );
        assert_eq!(config.bounds.individual.growth, SectionBounds::individual().growth);
        assert_eq!(config.bounds.couple, SectionBounds::couple());
    }

    #[test]
    fn test_env_wins_over_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attune.toml");
        fs::write(&path, "require_complete_answers = true\n").unwrap();

        env::set_var(REQUIRE_COMPLETE_VAR, "false");
        let config = EngineConfig::from_file(path.to_str().unwrap());
        env::remove_var(REQUIRE_COMPLETE_VAR);

        assert!(!config.unwrap().require_complete_answers);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(EngineConfig::from_file("/nonexistent/attune.toml").is_err());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let partial: EngineConfig =
            serde_json::from_str(r#"{"require_complete_answers": true}"#).unwrap();
        assert!(partial.require_complete_answers);
        assert_eq!(partial.bounds, config.bounds);
        assert_eq!(serde_json::from_str::<EngineConfig>(&json).unwrap(), config);
    }
}

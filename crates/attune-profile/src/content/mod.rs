//! Static content tables.

pub mod tables;

pub use tables::{
    compatibility_sentence, contrast, growth_by_title, pole_content, strength_by_title, DimensionContrast,
    GrowthEntry, PoleContent, ScenarioEntry, StrengthEntry,
};

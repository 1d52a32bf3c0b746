//! # Attune-Profile
//!
//! Turns scored assessments into validated relationship profiles.
//!
//! ## Flow
//!
//! ```text
//! Scores
//!     ↓
//! [ContentAggregator] → IndividualResult
//!     ↓                       ↓ (two of them)
//!     ↓               [CoupleBuilder] → CoupleResult
//!     ↓                       ↓
//! [Validator] ← ─ ─ ─ ─ ─ ─ ─ ┘
//!     ↓
//! result or ValidationError
//! ```
//!
//! `AssessmentEngine` wires the pipeline so construction and validation
//! are a single call from the caller's point of view.

pub mod aggregator;
pub mod config;
pub mod content;
pub mod couple;
pub mod engine;
pub mod error;
pub mod text;
pub mod types;
pub mod validator;

pub use aggregator::ContentAggregator;
pub use config::*;
pub use couple::{count_mismatches, CoupleBuilder};
pub use engine::AssessmentEngine;
pub use error::{EngineError, Result};
pub use types::*;
pub use validator::{validate, validate_couple, validate_individual, Validate, ValidationError};

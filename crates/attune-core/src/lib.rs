//! # Attune-Core
//!
//! Question banks, answer scoring and type classification for the Attune
//! relationship-personality assessment.
//!
//! ## Pipeline
//!
//! ```text
//! QuestionBank + AnswerSet
//!     ↓
//! [score]     → Scores (four dimensions, 0..=100)
//!     ↓
//! [classify]  → TypeCode + type name
//! ```
//!
//! Everything here is a pure function over immutable inputs. Content
//! selection and validation live in `attune-profile`.

pub mod answers;
pub mod classify;
pub mod dimension;
pub mod error;
pub mod questions;
pub mod scoring;

pub use answers::*;
pub use classify::*;
pub use dimension::*;
pub use error::{InputError, Result};
pub use questions::*;
pub use scoring::*;

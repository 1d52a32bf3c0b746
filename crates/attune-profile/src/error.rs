//! Engine error types.

use attune_core::InputError;
use thiserror::Error;

use crate::validator::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl EngineError {
    /// Message safe to show an end user; never names internal sections.
    pub fn user_message(&self) -> &'static str {
        match self {
            EngineError::Input(_) => "Some answers could not be read. Please review them and try again.",
            EngineError::Validation(_) => "We could not generate your results. Please try again.",
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

//! Input error types for the assessment core.

use thiserror::Error;

/// Malformed answer sets and type codes.
///
/// These are precondition violations: the caller supplied something the
/// question bank cannot interpret.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Likert answer for {question_id} out of range: expected 1-7, got {value}")]
    LikertOutOfRange { question_id: String, value: u8 },

    #[error("Answer kind mismatch for {question_id}: expected {expected}, got {actual}")]
    AnswerKindMismatch {
        question_id: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Incomplete answer set: {missing} of {total} questions unanswered")]
    MissingAnswers { missing: usize, total: usize },

    #[error("Invalid type code: {0}")]
    InvalidTypeCode(String),
}

pub type Result<T> = std::result::Result<T, InputError>;

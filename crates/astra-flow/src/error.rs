use thiserror::Error;

use astra_core::models::question::QuestionId;

/// An answer that cannot be submitted for the question it targets.
/// Surfaced to the caller so the UI can block the action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{id}: an answer is required")]
    AnswerRequired { id: QuestionId },

    #[error("{id}: answer shape does not match the question kind")]
    KindMismatch { id: QuestionId },

    #[error("{id}: {selected} selections exceed the maximum of {max}")]
    TooManySelections {
        id: QuestionId,
        selected: usize,
        max: usize,
    },

    #[error("{id}: value {value} is outside [{min}, {max}]")]
    OutOfRange {
        id: QuestionId,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("cannot skip required question {id}")]
    SkipRequired { id: QuestionId },

    #[error("session is already completed")]
    SessionCompleted,
}

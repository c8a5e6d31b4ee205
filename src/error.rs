//! Crate-level error type.

use std::io;

use thiserror::Error;

use crate::models::{QuestionError, QuizState};

/// Errors reported by quiz operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// An operation was called in a state that does not allow it.
    #[error("cannot {operation} while {state}")]
    InvalidStateTransition {
        operation: &'static str,
        state: QuizState,
    },

    /// A question in the loaded set failed validation; the set was rejected.
    #[error("question {position} is malformed: {source}", position = .index + 1)]
    MalformedQuestionData {
        index: usize,
        #[source]
        source: QuestionError,
    },

    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = QuizError> = std::result::Result<T, E>;

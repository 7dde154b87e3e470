//! Exam engine error types.
//!
//! Defined in `studyforge-core` so every layer (store, CLI) can match on the
//! same taxonomy instead of string matching.

use thiserror::Error;

use crate::model::ExamStatus;

/// Errors that can occur when generating, taking, or scoring an exam.
#[derive(Debug, Error)]
pub enum ExamError {
    /// The caller supplied input the engine cannot work with, e.g. exam
    /// generation with no course material available.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A lookup by id returned nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// An operation was attempted against an exam in the wrong lifecycle
    /// state (transitions are strictly pending → in-progress → completed).
    #[error("invalid state: expected {expected}, exam is {actual}")]
    InvalidState {
        expected: ExamStatus,
        actual: ExamStatus,
    },

    /// An entity with this id already exists for the owning profile.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// A profile with this email already exists.
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),
}

impl ExamError {
    /// Convenience constructor for state mismatches.
    pub fn invalid_state(expected: ExamStatus, actual: ExamStatus) -> Self {
        ExamError::InvalidState { expected, actual }
    }
}

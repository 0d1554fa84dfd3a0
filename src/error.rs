//! Allocation errors.
//!
//! Every failure is raised synchronously to the caller. Allocation is
//! deterministic, so none of these are worth retrying.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationError;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, AllocError>;

/// Errors produced by the apportioner, matrix allocator, and builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    /// A contract violation: negative target, negative ideal, length mismatch.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Column percentages do not sum to 100 or exceed the knowledge cap.
    #[error("invalid column spec: {message}")]
    InvalidColumnSpec { message: String },

    /// Topic list is empty or has no positive hours.
    #[error("invalid topics: {message}")]
    InvalidTopics { message: String },

    /// The allocated matrix misses a row or column target.
    ///
    /// Unreachable for mutually consistent targets; indicates a bug in
    /// the caller's target derivation.
    #[error("allocation infeasible: {axis} {index} sums to {achieved}, expected {expected}")]
    AllocationInfeasible {
        axis: Axis,
        index: usize,
        achieved: i64,
        expected: i64,
    },
}

/// Matrix axis named in an [`AllocError::AllocationInfeasible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

impl AllocError {
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Collapses collected column-spec validation errors into one error.
    #[must_use]
    pub fn column_spec(errors: &[ValidationError]) -> Self {
        Self::InvalidColumnSpec {
            message: join_messages(errors),
        }
    }

    /// Collapses collected topic validation errors into one error.
    #[must_use]
    pub fn topics(errors: &[ValidationError]) -> Self {
        Self::InvalidTopics {
            message: join_messages(errors),
        }
    }

    /// Whether this error stems from user-entered configuration.
    ///
    /// `InvalidColumnSpec` and `InvalidTopics` map to form validation
    /// messages; the others indicate a caller bug.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidColumnSpec { .. } | Self::InvalidTopics { .. }
        )
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

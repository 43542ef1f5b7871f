//! Error types for the review workflow.
//!
//! Both kinds are recoverable: the caller re-prompts for input or waits for a
//! new submission. No operation mutates workflow state before failing.

use std::fmt;

use thiserror::Error;

/// Input field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PenaltyClause,
    ScopeClarity,
    DelayRisk,
    OwnerDecision,
}

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// The placeholder choice was still selected.
    Unselected,
    /// The text did not name any known choice.
    Unrecognized(String),
}

/// Errors returned by [`Workflow`](crate::Workflow) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// A choice was left on its placeholder or was not a valid option.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: Field,
        reason: ValidationReason,
    },

    /// Adjustment or finalization was attempted with no record under review.
    #[error("cannot {operation}: no contract is under review")]
    NoActiveRecord { operation: &'static str },
}

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

impl WorkflowError {
    pub(crate) fn unselected(field: Field) -> Self {
        WorkflowError::Validation {
            field,
            reason: ValidationReason::Unselected,
        }
    }

    pub(crate) fn unrecognized(field: Field, text: &str) -> Self {
        WorkflowError::Validation {
            field,
            reason: ValidationReason::Unrecognized(text.to_string()),
        }
    }

    /// Whether this is a validation failure (as opposed to a missing record).
    pub fn is_validation(&self) -> bool {
        matches!(self, WorkflowError::Validation { .. })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::PenaltyClause => write!(f, "penalty clause"),
            Field::ScopeClarity => write!(f, "scope clarity"),
            Field::DelayRisk => write!(f, "delay risk"),
            Field::OwnerDecision => write!(f, "owner decision"),
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Unselected => write!(f, "please select a valid option"),
            ValidationReason::Unrecognized(text) => write!(f, "unknown option {:?}", text),
        }
    }
}

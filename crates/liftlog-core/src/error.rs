//! Error types for Liftlog core operations.
//!
//! Validation and not-found conditions are raised to the immediate caller,
//! which decides how to surface them. Unreadable stored records are not
//! errors; the session repository drops them on read.

use thiserror::Error;

/// Result type alias for Liftlog operations.
pub type Result<T> = std::result::Result<T, LiftlogError>;

/// Core error type for Liftlog operations.
#[derive(Debug, Error)]
pub enum LiftlogError {
    /// Input failed a domain rule; nothing was written
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Mutation targeted an id that does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input that is not a domain rule (unknown metric name, bad id)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LiftlogError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        LiftlogError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns the validation code if this is a validation error.
    pub fn validation_code(&self) -> Option<&'static str> {
        match self {
            LiftlogError::Validation(err) => Some(err.code()),
            _ => None,
        }
    }
}

/// Domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("an exercise with this name already exists")]
    DuplicateName,

    #[error("reps must be a whole number between 0 and {max}")]
    InvalidReps { max: u32 },

    #[error("weight must be a number between 0 and {max}")]
    InvalidWeight { max: u32 },

    #[error("effort must be between 1 and 10")]
    InvalidEffort,
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "empty-name",
            ValidationError::DuplicateName => "duplicate-name",
            ValidationError::InvalidReps { .. } => "invalid-reps",
            ValidationError::InvalidWeight { .. } => "invalid-weight",
            ValidationError::InvalidEffort => "invalid-effort",
        }
    }
}

impl From<std::io::Error> for LiftlogError {
    fn from(err: std::io::Error) -> Self {
        LiftlogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LiftlogError {
    fn from(err: serde_json::Error) -> Self {
        LiftlogError::Storage(err.to_string())
    }
}

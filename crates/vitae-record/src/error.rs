//! Boundary error types.

use thiserror::Error;

/// A problem mapping one record into a typed row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required column/field is absent, or its value is the missing
    /// sentinel where a value is required.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// A cell could not be coerced to the expected shape.
    #[error("field '{field}': expected {expected}, got {found} '{value}'")]
    Type {
        field: String,
        expected: &'static str,
        found: &'static str,
        value: String,
    },
}

impl RecordError {
    /// The offending field name.
    pub fn field(&self) -> &str {
        match self {
            RecordError::MissingField { field } => field,
            RecordError::Type { field, .. } => field,
        }
    }
}

/// A problem obtaining a section from a [`crate::RecordSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The named section does not exist in the record set.
    #[error("section '{name}' not found in the record set")]
    SectionNotFound { name: String },

    /// The underlying reader failed.
    #[error("failed to read record set: {message}")]
    Read { message: String },
}

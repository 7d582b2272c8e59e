//! Domain error model.

use thiserror::Error;

/// Result type used across the record layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Record-level error.
///
/// Every variant is a usage error: local, synchronous and not worth retrying
/// with the same input. No partial instance is ever produced alongside one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record-specific rule rejected the field values.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A required field was not supplied and declares no default.
    #[error("{record}: missing required field `{field}`")]
    Arity { record: &'static str, field: String },

    /// A field name that the record does not declare.
    #[error("{record}: unknown field `{field}`")]
    UnknownField { record: &'static str, field: String },

    /// A field value of the wrong kind (or out of range for the field type).
    #[error("{record}: field `{field}` expects {expected}, got {found}")]
    FieldType {
        record: &'static str,
        field: String,
        expected: String,
        found: String,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn arity(record: &'static str, field: impl Into<String>) -> Self {
        Self::Arity {
            record,
            field: field.into(),
        }
    }

    pub fn unknown_field(record: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record,
            field: field.into(),
        }
    }

    pub fn field_type(
        record: &'static str,
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::FieldType {
            record,
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

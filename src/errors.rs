// src/errors.rs
//! Error types for decoding and validating exchange messages.
//!
//! Decoding and validation are separate passes, so each has its own error
//! type. Every variant carries the wire name of the offending field so an
//! outer layer (HTTP handler, CLI) can produce an actionable message.

use thiserror::Error;

/// Failure to turn a byte payload into a message value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON, is not a JSON object, or a field
    /// has the wrong JSON type.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// A string field names an enumerator this crate does not know.
    #[error("unknown value `{value}` for field `{field}`")]
    UnknownEnumValue { field: &'static str, value: String },
}

/// Failure of a decoded or constructed message to satisfy its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent, `null` or empty.
    #[error("{0} cannot be null")]
    MissingField(&'static str),

    /// A field is present but its value is not acceptable.
    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// A nested object failed its own validation.
    #[error("{field} failed validation: {source}")]
    NestedValidationFailure {
        field: &'static str,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Wraps this error as the cause of a failure in the nested object `field`.
    pub fn nested(self, field: &'static str) -> Self {
        ValidationError::NestedValidationFailure {
            field,
            source: Box::new(self),
        }
    }

    /// Dotted path from the outermost object to the offending field,
    /// e.g. `proof.created`.
    pub fn field_path(&self) -> String {
        match self {
            ValidationError::MissingField(field) => field.to_string(),
            ValidationError::InvalidValue { field, .. } => field.to_string(),
            ValidationError::NestedValidationFailure { field, source } => {
                format!("{}.{}", field, source.field_path())
            }
        }
    }

    /// Message for the innermost violation with its full path under `scope`,
    /// e.g. `reqEcdh.proof.created cannot be null`.
    pub fn scoped_message(&self, scope: &str) -> String {
        match self {
            ValidationError::MissingField(field) => format!("{}.{} cannot be null", scope, field),
            ValidationError::InvalidValue { field, reason } => {
                format!("{}.{} is invalid: {}", scope, field, reason)
            }
            ValidationError::NestedValidationFailure { field, source } => {
                source.scoped_message(&format!("{}.{}", scope, field))
            }
        }
    }
}

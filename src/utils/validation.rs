// src/utils/validation.rs
//! Explicit field validation for exchange messages.
//!
//! Each message type implements [`Validate`] by checking its fields in a
//! fixed order and returning the first violation.

use crate::errors::ValidationError;

/// A value that can check its own invariants.
pub trait Validate {
    /// Returns `Ok(())` when every invariant holds, otherwise the first
    /// violation found. Never mutates `self`.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Requires a string field to be present and non-empty.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(text) if !text.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Requires a non-string field to be present.
pub fn require<T>(field: &'static str, value: Option<&T>) -> Result<(), ValidationError> {
    value.map(|_| ()).ok_or(ValidationError::MissingField(field))
}

/// Validates an optional nested object, tagging any failure with `field`.
pub fn validate_nested<T: Validate>(
    field: &'static str,
    value: Option<&T>,
) -> Result<(), ValidationError> {
    match value {
        Some(inner) => inner.validate().map_err(|e| e.nested(field)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        fn validate(&self) -> Result<(), ValidationError> {
            Err(ValidationError::MissingField("inner"))
        }
    }

    #[test]
    fn test_require_text_rejects_empty_and_absent() {
        assert_eq!(
            require_text("client", None),
            Err(ValidationError::MissingField("client"))
        );
        assert_eq!(
            require_text("client", Some("")),
            Err(ValidationError::MissingField("client"))
        );
        assert!(require_text("client", Some("did:example:1")).is_ok());
    }

    #[test]
    fn test_require_presence_only() {
        assert!(require("curve", Some(&0u8)).is_ok());
        assert_eq!(
            require::<u8>("curve", None),
            Err(ValidationError::MissingField("curve"))
        );
    }

    #[test]
    fn test_validate_nested_tags_failure() {
        // Absent optional object is never a failure
        assert!(validate_nested::<AlwaysFails>("proof", None).is_ok());

        let err = validate_nested("proof", Some(&AlwaysFails)).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("inner").nested("proof"));
    }
}

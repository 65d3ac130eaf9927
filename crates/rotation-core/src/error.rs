//! Error types for the Rotation library.
//!
//! The calculator itself is total over its constrained input domain; these
//! errors come from the validating entry points and from field lookups.

use thiserror::Error;

/// A specialized Result type for Rotation operations.
pub type RotationResult<T> = Result<T, RotationError>;

/// The main error type for Rotation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    /// An input field violates its domain constraint.
    #[error("Invalid input {field} = {value}: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// A field name did not match any calculation input.
    #[error("Unknown input field: {name}")]
    UnknownField {
        /// The name that failed to resolve.
        name: String,
    },
}

impl RotationError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Returns the field name this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::UnknownField { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RotationError::invalid_input("local_frequency", 0.0, "must be greater than zero");
        assert!(err.to_string().contains("local_frequency"));
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_unknown_field() {
        let err = RotationError::unknown_field("seats");
        assert!(err.to_string().contains("seats"));
        assert_eq!(err.field(), None);
    }
}

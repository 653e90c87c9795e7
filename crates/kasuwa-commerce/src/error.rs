//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in client-side commerce operations.
///
/// There is no fatal class here: every failure is local to one
/// collection or calculation and is surfaced to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A required field was missing or blank. No mutation is applied.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An operation referenced an id absent from its collection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Quantity below the minimum of one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Currency mismatch in a money calculation.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Build a validation error for a blank required field.
    pub fn required(field: &str) -> Self {
        CommerceError::Validation(format!("{field} is required"))
    }

    /// Build a not-found error for a record in a named collection.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        CommerceError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommerceError::required("label");
        assert_eq!(err.to_string(), "Validation failed: label is required");

        let err = CommerceError::not_found("address", "42");
        assert_eq!(err.to_string(), "address not found: 42");
    }
}

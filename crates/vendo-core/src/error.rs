//! # Error Types
//!
//! Validation error types for vendo-core.
//!
//! Rule evaluation itself never fails: every table carries an explicit
//! default branch, so an unrecognized region code or plan name produces the
//! documented fallback result rather than an error. The only failures this
//! crate can report come from the opt-in validators in [`crate::validation`],
//! which callers run at their boundary *before* feeding values to the rules.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements. Used for early
/// validation before rule evaluation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-digit characters in a card number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "card number".to_string(),
        };
        assert_eq!(err.to_string(), "card number is required");

        let err = ValidationError::OutOfRange {
            field: "weight".to_string(),
            min: 0,
            max: i64::MAX,
        };
        assert!(err.to_string().starts_with("weight must be between 0"));
    }

    #[test]
    fn test_invalid_format_message() {
        let err = ValidationError::InvalidFormat {
            field: "card number".to_string(),
            reason: "must contain only digits".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "card number has invalid format: must contain only digits"
        );
    }
}

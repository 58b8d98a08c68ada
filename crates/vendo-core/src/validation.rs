//! # Validation Module
//!
//! Opt-in input validation for callers of the rule modules.
//!
//! The rules themselves are deliberately total: unknown codes fall back to
//! defaults and numeric inputs flow through the arithmetic unchecked, exactly
//! as the checkout flow has always behaved. These validators exist for
//! boundaries that want to reject nonsense *before* it reaches a rule —
//! a negative shipment weight, a card number with letters in it — instead
//! of letting it propagate.
//!
//! ## Usage
//! ```rust
//! use vendo_core::validation::{validate_card_digits, validate_weight_lbs};
//!
//! assert!(validate_card_digits("4111111111111111").is_ok());
//! assert!(validate_card_digits("4111-1111").is_err());
//! assert!(validate_weight_lbs(-3).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Region and destination codes are short identifiers like "US" or "NY".
const MAX_REGION_CODE_LENGTH: usize = 8;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a card number is non-empty and all ASCII digits.
///
/// The card rules compare prefixes and lengths without caring what the
/// characters are; run this first when the input comes from a form field.
pub fn validate_card_digits(number: &str) -> ValidationResult<()> {
    if number.is_empty() {
        return Err(ValidationError::Required {
            field: "card number".to_string(),
        });
    }

    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "card number".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a region/destination code.
///
/// ## Rules
/// - Must not be empty
/// - At most 8 characters
/// - Uppercase ASCII letters and digits only
///
/// Note this is stricter than rule evaluation, which happily defaults any
/// unrecognized string. Use it where a typo should surface as an error
/// rather than silently pricing as international/default-rate.
pub fn validate_region_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "region code".to_string(),
        });
    }

    if code.len() > MAX_REGION_CODE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "region code".to_string(),
            max: MAX_REGION_CODE_LENGTH,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidFormat {
            field: "region code".to_string(),
            reason: "must contain only uppercase letters and digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a shipment weight in whole pounds.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: envelope-weight shipments)
pub fn validate_weight_lbs(weight_lbs: i64) -> ValidationResult<()> {
    if weight_lbs < 0 {
        return Err(ValidationError::OutOfRange {
            field: "weight".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a monetary amount in cents.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
pub fn validate_amount_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a subscription length in months.
///
/// ## Rules
/// - Must be positive (a zero-month subscription prices to zero, which is
///   never what the caller meant)
pub fn validate_months(months: i64) -> ValidationResult<()> {
    if months <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "months".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

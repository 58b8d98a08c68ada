//! # Card Number Rules
//!
//! Validates card numbers by prefix and exact length.
//!
//! Two gates, applied in order:
//!
//! 1. A global length window: anything outside [13, 19] digits is invalid.
//! 2. An **ordered** prefix rule list; the first rule whose prefix matches
//!    decides the required exact length. The single-digit prefixes ("4", "5")
//!    are listed before the multi-digit ones ("34", "37", "6011") and that
//!    order is part of the contract.
//!
//! A number matching no prefix rule is invalid. No Luhn check is performed
//! here; this is the issuer-format gate only.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Global length window applied before any prefix rule.
pub const MIN_CARD_LENGTH: usize = 13;
pub const MAX_CARD_LENGTH: usize = 19;

// =============================================================================
// Card Networks
// =============================================================================

/// Card networks recognized by the prefix rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

// =============================================================================
// Rule Table
// =============================================================================

/// One prefix rule: numbers starting with `prefix` must have exactly
/// `required_length` digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardRule {
    pub prefix: String,
    pub required_length: usize,
    pub network: CardNetwork,
}

/// The ordered card rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardRuleSet {
    /// First matching prefix wins. Order is the contract.
    pub rules: Vec<CardRule>,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for CardRuleSet {
    fn default() -> Self {
        let rule = |prefix: &str, required_length: usize, network: CardNetwork| CardRule {
            prefix: prefix.to_string(),
            required_length,
            network,
        };
        CardRuleSet {
            rules: vec![
                rule("4", 16, CardNetwork::Visa),
                rule("5", 16, CardNetwork::Mastercard),
                rule("34", 15, CardNetwork::Amex),
                rule("37", 15, CardNetwork::Amex),
                rule("6011", 16, CardNetwork::Discover),
            ],
            min_length: MIN_CARD_LENGTH,
            max_length: MAX_CARD_LENGTH,
        }
    }
}

impl CardRuleSet {
    /// Returns the first rule whose prefix matches the number.
    fn matching_rule(&self, number: &str) -> Option<&CardRule> {
        self.rules
            .iter()
            .find(|rule| number.starts_with(rule.prefix.as_str()))
    }

    /// Checks a card number against the length window and prefix rules.
    ///
    /// The number is taken as-is: no trimming, no stripping of spaces.
    /// Callers wanting to reject non-digit input up front run
    /// [`crate::validation::validate_card_digits`] first.
    pub fn is_valid(&self, number: &str) -> bool {
        let len = number.len();
        if len < self.min_length || len > self.max_length {
            return false;
        }
        match self.matching_rule(number) {
            Some(rule) => len == rule.required_length,
            None => false,
        }
    }

    /// Identifies the network a number would belong to, by prefix alone.
    ///
    /// This does not imply validity; a 13-digit number starting with "4" is
    /// recognizably Visa-prefixed but fails [`Self::is_valid`].
    pub fn network_for(&self, number: &str) -> Option<CardNetwork> {
        self.matching_rule(number).map(|rule| rule.network)
    }
}

// =============================================================================
// Convenience Entry Points
// =============================================================================

/// Validity under the canonical rule set.
///
/// ```rust
/// use vendo_core::card;
///
/// assert!(card::is_valid_number("4111111111111111")); // Visa, 16
/// assert!(!card::is_valid_number("411111111111"));    // 12 digits, too short
/// ```
pub fn is_valid_number(number: &str) -> bool {
    CardRuleSet::default().is_valid(number)
}

/// Network detection under the canonical rule set.
pub fn network_for(number: &str) -> Option<CardNetwork> {
    CardRuleSet::default().network_for(number)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_sixteen_digits() {
        assert!(is_valid_number("4111111111111111"));
        assert!(!is_valid_number("4111111111111")); // 13: in window, wrong length
    }

    #[test]
    fn test_length_window() {
        assert!(!is_valid_number("411111111111")); // 12 digits, below window
        assert!(!is_valid_number("41111111111111111111")); // 20 digits, above
        assert!(!is_valid_number(""));
    }

    #[test]
    fn test_mastercard() {
        assert!(is_valid_number("5500000000000004"));
        assert!(!is_valid_number("550000000000004")); // 15 digits
    }

    #[test]
    fn test_amex_both_prefixes() {
        assert!(is_valid_number("340000000000000"));
        assert!(is_valid_number("370000000000000"));
        assert!(!is_valid_number("3400000000000000")); // 16 digits
    }

    #[test]
    fn test_discover() {
        assert!(is_valid_number("6011000000000004"));
        assert!(!is_valid_number("601100000000004")); // 15 digits
    }

    #[test]
    fn test_unknown_prefix_is_invalid() {
        // 16 digits, but no rule covers prefix "9"
        assert!(!is_valid_number("9111111111111111"));
        // "60" without the full "6011" prefix matches nothing
        assert!(!is_valid_number("6022000000000004"));
    }

    #[test]
    fn test_network_detection_ignores_length() {
        assert_eq!(network_for("4111111111111111"), Some(CardNetwork::Visa));
        assert_eq!(network_for("41"), Some(CardNetwork::Visa));
        assert_eq!(network_for("37000"), Some(CardNetwork::Amex));
        assert_eq!(network_for("6011"), Some(CardNetwork::Discover));
        assert_eq!(network_for("9999"), None);
    }

    #[test]
    fn test_rule_order_preserved_through_json() {
        let rules = CardRuleSet::default();
        let json = serde_json::to_string(&rules).unwrap();
        let back: CardRuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rules);
        assert_eq!(back.rules[0].prefix, "4");
        assert_eq!(back.rules[4].prefix, "6011");
    }
}

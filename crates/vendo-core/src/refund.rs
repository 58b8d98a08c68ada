//! # Refund Policy
//!
//! Decides whether a refund request can be processed. Three independent
//! guards, checked in a fixed order; all must pass:
//!
//! ```text
//! 1. days since purchase ≤ 30          (return window)
//! 2. amount ≤ $10,000                  (absolute cap)
//! 3. days ≤ 14 OR amount ≤ $500       (late refunds are capped at $500)
//! ```
//!
//! The first failing guard names the denial reason; callers that only need
//! a yes/no use [`can_process`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Policy
// =============================================================================

/// Why a refund request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RefundDenial {
    /// Purchase is older than the return window.
    WindowExpired,
    /// Amount exceeds the absolute refund cap.
    AmountOverCap,
    /// Purchase is past the full-refund window and the amount exceeds the
    /// late-window cap.
    LateWindowAmountOverCap,
}

/// The refund policy thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RefundPolicy {
    /// No refunds at all past this many days.
    pub return_window_days: i64,
    /// No refund may exceed this amount, ever.
    pub max_refund: Money,
    /// Past this many days, refunds are capped at `late_window_cap`.
    pub full_refund_window_days: i64,
    pub late_window_cap: Money,
}

impl Default for RefundPolicy {
    fn default() -> Self {
        RefundPolicy {
            return_window_days: 30,
            max_refund: Money::from_cents(1_000_000), // $10,000
            full_refund_window_days: 14,
            late_window_cap: Money::from_cents(50_000), // $500
        }
    }
}

impl RefundPolicy {
    /// Evaluates the guards in order; returns the first denial, if any.
    pub fn deny_reason(&self, days_since_purchase: i64, amount: Money) -> Option<RefundDenial> {
        if days_since_purchase > self.return_window_days {
            return Some(RefundDenial::WindowExpired);
        }
        if amount > self.max_refund {
            return Some(RefundDenial::AmountOverCap);
        }
        if days_since_purchase > self.full_refund_window_days && amount > self.late_window_cap {
            return Some(RefundDenial::LateWindowAmountOverCap);
        }
        None
    }

    /// True when every guard passes.
    pub fn allows(&self, days_since_purchase: i64, amount: Money) -> bool {
        self.deny_reason(days_since_purchase, amount).is_none()
    }
}

// =============================================================================
// Convenience Entry Point
// =============================================================================

/// Refund decision under the canonical policy.
///
/// ```rust
/// use vendo_core::money::Money;
/// use vendo_core::refund;
///
/// assert!(refund::can_process(10, Money::from_cents(60_000)));
/// assert!(!refund::can_process(31, Money::from_cents(10_000)));
/// ```
pub fn can_process(days_since_purchase: i64, amount: Money) -> bool {
    RefundPolicy::default().allows(days_since_purchase, amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_major_minor(d, 0)
    }

    #[test]
    fn test_window_expired() {
        assert!(!can_process(31, dollars(100)));
        assert!(can_process(30, dollars(100)));
    }

    #[test]
    fn test_absolute_cap() {
        assert!(can_process(10, dollars(10_000)));
        assert!(!can_process(10, Money::from_cents(1_000_001)));
    }

    #[test]
    fn test_late_window_cap() {
        // within 14 days, amounts up to the absolute cap pass
        assert!(can_process(10, dollars(600)));
        assert!(can_process(10, dollars(5_000)));
        // past 14 days, more than $500 is denied
        assert!(!can_process(20, dollars(600)));
        assert!(can_process(20, dollars(500)));
        assert!(can_process(15, dollars(500)));
    }

    #[test]
    fn test_deny_reasons_in_guard_order() {
        let policy = RefundPolicy::default();
        assert_eq!(
            policy.deny_reason(31, dollars(20_000)),
            Some(RefundDenial::WindowExpired)
        );
        assert_eq!(
            policy.deny_reason(20, dollars(20_000)),
            Some(RefundDenial::AmountOverCap)
        );
        assert_eq!(
            policy.deny_reason(20, dollars(600)),
            Some(RefundDenial::LateWindowAmountOverCap)
        );
        assert_eq!(policy.deny_reason(5, dollars(100)), None);
    }

    #[test]
    fn test_custom_policy() {
        let policy = RefundPolicy {
            return_window_days: 90,
            max_refund: dollars(50_000),
            full_refund_window_days: 30,
            late_window_cap: dollars(1_000),
        };
        assert!(policy.allows(60, dollars(1_000)));
        assert!(!policy.allows(60, dollars(1_001)));
        assert!(!policy.allows(91, dollars(10)));
    }

    #[test]
    fn test_policy_round_trips_as_json() {
        let policy = RefundPolicy::default();
        let json = serde_json::to_string(&policy).unwrap();
        let back: RefundPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }
}

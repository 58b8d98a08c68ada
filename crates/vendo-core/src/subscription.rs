//! # Subscription Pricing
//!
//! Prices a subscription as monthly price × months, less a duration
//! discount:
//!
//! ```text
//! BASIC $9.99   STANDARD $14.99   PREMIUM $19.99   ENTERPRISE $49.99
//!
//! months ≥ 12 → 20% off    months ≥ 6 → 10% off    otherwise full price
//! ```
//!
//! An unknown plan name prices at the explicit fallback (the BASIC price).
//! Duration discounts are an ordered first-match list, longest commitment
//! first. The discount portion rounds half-up on the fractional cent, so
//! BASIC × 12 at 20% off is exactly 9590 cents.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Rate;

/// Canonical plans as (name, monthly cents).
const DEFAULT_PLANS: &[(&str, i64)] = &[
    ("BASIC", 999),
    ("STANDARD", 1_499),
    ("PREMIUM", 1_999),
    ("ENTERPRISE", 4_999),
];

/// Monthly price for plan names not in the table.
const DEFAULT_FALLBACK_CENTS: i64 = 999;

/// Canonical duration discounts as (min_months, bps), longest first.
const DEFAULT_DURATION_DISCOUNTS: &[(i64, u32)] = &[(12, 2_000), (6, 1_000)];

// =============================================================================
// Pricing Table
// =============================================================================

/// One subscription plan: name → monthly price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Plan {
    /// Plan name, matched exactly (case-sensitive).
    pub name: String,
    pub monthly: Money,
}

/// A commitment-length discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DurationDiscount {
    /// Minimum number of months that qualifies.
    pub min_months: i64,
    pub rate: Rate,
}

/// The subscription pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanPricing {
    pub plans: Vec<Plan>,
    /// Monthly price for unknown plan names.
    pub fallback_monthly: Money,
    /// Sorted by descending `min_months`; first match wins.
    pub duration_discounts: Vec<DurationDiscount>,
}

impl Default for PlanPricing {
    fn default() -> Self {
        PlanPricing {
            plans: DEFAULT_PLANS
                .iter()
                .map(|&(name, cents)| Plan {
                    name: name.to_string(),
                    monthly: Money::from_cents(cents),
                })
                .collect(),
            fallback_monthly: Money::from_cents(DEFAULT_FALLBACK_CENTS),
            duration_discounts: DEFAULT_DURATION_DISCOUNTS
                .iter()
                .map(|&(min_months, bps)| DurationDiscount {
                    min_months,
                    rate: Rate::from_bps(bps),
                })
                .collect(),
        }
    }
}

impl PlanPricing {
    /// Returns the monthly price for a plan name.
    pub fn monthly_for(&self, plan: &str) -> Money {
        self.plans
            .iter()
            .find(|p| p.name == plan)
            .map(|p| p.monthly)
            .unwrap_or(self.fallback_monthly)
    }

    /// Returns the duration discount for a commitment length.
    pub fn duration_rate(&self, months: i64) -> Rate {
        self.duration_discounts
            .iter()
            .find(|d| months >= d.min_months)
            .map(|d| d.rate)
            .unwrap_or_else(Rate::zero)
    }

    /// Total price for a plan over a commitment length.
    pub fn price(&self, plan: &str, months: i64) -> Money {
        let full = self.monthly_for(plan) * months;
        full.discounted_by(self.duration_rate(months))
    }
}

// =============================================================================
// Convenience Entry Point
// =============================================================================

/// Subscription price under the canonical table.
///
/// ```rust
/// use vendo_core::subscription;
///
/// // $9.99 × 12 months at 20% off
/// assert_eq!(subscription::price("BASIC", 12).cents(), 9_590);
/// assert_eq!(subscription::price("UNKNOWN_PLAN", 1).cents(), 999);
/// ```
pub fn price(plan: &str, months: i64) -> Money {
    PlanPricing::default().price(plan, months)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_prices_no_discount() {
        assert_eq!(price("BASIC", 1).cents(), 999);
        assert_eq!(price("STANDARD", 1).cents(), 1_499);
        assert_eq!(price("PREMIUM", 1).cents(), 1_999);
        assert_eq!(price("ENTERPRISE", 1).cents(), 4_999);
        assert_eq!(price("PREMIUM", 5).cents(), 9_995);
    }

    #[test]
    fn test_unknown_plan_uses_fallback() {
        assert_eq!(price("UNKNOWN_PLAN", 1).cents(), 999);
        // matching is case-sensitive: "basic" is not "BASIC"
        assert_eq!(price("basic", 1).cents(), 999);
    }

    #[test]
    fn test_annual_discount() {
        // 999 × 12 = 11988; 20% portion = 2398 (half-up); price 9590
        assert_eq!(price("BASIC", 12).cents(), 9_590);
        // discount applies at the boundary and beyond
        assert_eq!(price("ENTERPRISE", 24).cents(), 95_981); // 119976 − 23995
    }

    #[test]
    fn test_semi_annual_discount() {
        // 1499 × 6 = 8994; 10% portion = 899 (899.4 truncated by half-up); price 8095
        assert_eq!(price("STANDARD", 6).cents(), 8_095);
        assert_eq!(price("STANDARD", 11).cents(), 14_840); // 16489 − 1649
    }

    #[test]
    fn test_longest_commitment_wins() {
        let pricing = PlanPricing::default();
        assert_eq!(pricing.duration_rate(12).bps(), 2_000);
        assert_eq!(pricing.duration_rate(6).bps(), 1_000);
        assert_eq!(pricing.duration_rate(5).bps(), 0);
    }

    #[test]
    fn test_table_round_trips_as_json() {
        let pricing = PlanPricing::default();
        let json = serde_json::to_string(&pricing).unwrap();
        let back: PlanPricing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pricing);
    }
}

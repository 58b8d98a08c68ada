//! # Discount Schedule
//!
//! Maps a customer level to a fraction-of-total discount.
//!
//! The schedule is an ordered list of `(min_level, rate)` tiers, checked
//! top-down; **the first tier whose threshold the customer meets wins**, so
//! entries must be sorted by descending threshold. A customer matching no
//! tier gets the explicit zero rate, never an error.
//!
//! ```text
//! level ≥ 5 → 25%
//! level ≥ 3 → 15%
//! level ≥ 1 →  5%
//! otherwise →  0%
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Rate;

/// Canonical tiers as (min_level, bps), highest threshold first.
const DEFAULT_TIERS: &[(i32, u32)] = &[(5, 2_500), (3, 1_500), (1, 500)];

// =============================================================================
// Schedule
// =============================================================================

/// One row of the discount schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountTier {
    /// Minimum customer level that qualifies for this tier.
    pub min_level: i32,
    /// Discount applied to the order total.
    pub rate: Rate,
}

/// An ordered, first-match-wins discount schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountSchedule {
    /// Tiers sorted by descending `min_level`. Order is the contract:
    /// evaluation stops at the first qualifying tier.
    pub tiers: Vec<DiscountTier>,
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        DiscountSchedule {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|&(min_level, bps)| DiscountTier {
                    min_level,
                    rate: Rate::from_bps(bps),
                })
                .collect(),
        }
    }
}

impl DiscountSchedule {
    /// Returns the discount rate for a customer level.
    ///
    /// First qualifying tier wins; no tier → zero rate.
    pub fn rate_for(&self, customer_level: i32) -> Rate {
        self.tiers
            .iter()
            .find(|tier| customer_level >= tier.min_level)
            .map(|tier| tier.rate)
            .unwrap_or_else(Rate::zero)
    }

    /// Returns the discount amount for an order total at a customer level.
    pub fn amount(&self, total: Money, customer_level: i32) -> Money {
        total.rate_portion(self.rate_for(customer_level))
    }
}

// =============================================================================
// Convenience Entry Point
// =============================================================================

/// Discount amount under the canonical schedule.
///
/// ```rust
/// use vendo_core::discount;
/// use vendo_core::money::Money;
///
/// let total = Money::from_cents(10_000); // $100.00
/// assert_eq!(discount::amount(total, 5).cents(), 2_500); // 25%
/// assert_eq!(discount::amount(total, 0).cents(), 0);
/// ```
pub fn amount(total: Money, customer_level: i32) -> Money {
    DiscountSchedule::default().amount(total, customer_level)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_below_one_gets_nothing() {
        let total = Money::from_cents(10_000);
        assert_eq!(amount(total, 0).cents(), 0);
        assert_eq!(amount(total, -3).cents(), 0);
    }

    #[test]
    fn test_tier_boundaries() {
        let total = Money::from_cents(10_000);
        assert_eq!(amount(total, 1).cents(), 500); // 5%
        assert_eq!(amount(total, 2).cents(), 500);
        assert_eq!(amount(total, 3).cents(), 1_500); // 15%
        assert_eq!(amount(total, 4).cents(), 1_500);
        assert_eq!(amount(total, 5).cents(), 2_500); // 25%
    }

    #[test]
    fn test_highest_threshold_wins_above_top_tier() {
        let total = Money::from_cents(10_000);
        assert_eq!(amount(total, 50).cents(), 2_500);
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = DiscountSchedule {
            tiers: vec![DiscountTier {
                min_level: 10,
                rate: Rate::from_bps(5_000),
            }],
        };
        let total = Money::from_cents(2_000);
        assert_eq!(schedule.amount(total, 10).cents(), 1_000);
        assert_eq!(schedule.amount(total, 9).cents(), 0);
    }

    #[test]
    fn test_schedule_round_trips_as_json() {
        let schedule = DiscountSchedule::default();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: DiscountSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}

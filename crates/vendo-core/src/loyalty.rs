//! # Loyalty Points
//!
//! Awards points for a purchase: one base point per whole dollar, scaled by
//! a tier multiplier.
//!
//! ```text
//! BRONZE ×1   SILVER ×1.5   GOLD ×2   PLATINUM ×3   DIAMOND ×5
//! ```
//!
//! Two truncation points, both part of the contract:
//! - the base is the whole-dollar part of the purchase (cents dropped), and
//! - the scaled result truncates to an integer (SILVER on 7 base points
//!   yields 10, not 11).
//!
//! An unrecognized tier label earns the unscaled base points.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Multiplier;

/// Canonical tiers as (label, per-mille multiplier).
const DEFAULT_TIERS: &[(&str, u32)] = &[
    ("BRONZE", 1_000),
    ("SILVER", 1_500),
    ("GOLD", 2_000),
    ("PLATINUM", 3_000),
    ("DIAMOND", 5_000),
];

// =============================================================================
// Schedule
// =============================================================================

/// One loyalty tier: label → points multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoyaltyTier {
    /// Tier label, matched exactly (case-sensitive).
    pub label: String,
    pub multiplier: Multiplier,
}

/// The loyalty earning schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoyaltySchedule {
    pub tiers: Vec<LoyaltyTier>,
}

impl Default for LoyaltySchedule {
    fn default() -> Self {
        LoyaltySchedule {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|&(label, per_mille)| LoyaltyTier {
                    label: label.to_string(),
                    multiplier: Multiplier::from_per_mille(per_mille),
                })
                .collect(),
        }
    }
}

impl LoyaltySchedule {
    /// Returns the multiplier for a tier label.
    ///
    /// Unknown labels earn at the identity multiplier (base points unscaled).
    pub fn multiplier_for(&self, tier: &str) -> Multiplier {
        self.tiers
            .iter()
            .find(|row| row.label == tier)
            .map(|row| row.multiplier)
            .unwrap_or_else(Multiplier::identity)
    }

    /// Points earned for a purchase at a tier.
    ///
    /// Point scaling truncates rather than rounds: 7 base points at SILVER
    /// (×1.5) is 10 points. This mirrors how points have always been awarded,
    /// so switching rounding modes would change customers' balances.
    pub fn points(&self, purchase: Money, tier: &str) -> i64 {
        let base = purchase.dollars();
        let per_mille = self.multiplier_for(tier).per_mille() as i64;
        base * per_mille / 1_000
    }
}

// =============================================================================
// Convenience Entry Point
// =============================================================================

/// Points earned under the canonical schedule.
///
/// ```rust
/// use vendo_core::loyalty;
/// use vendo_core::money::Money;
///
/// let purchase = Money::from_cents(10_050); // $100.50 → 100 base points
/// assert_eq!(loyalty::points(purchase, "GOLD"), 200);
/// assert_eq!(loyalty::points(purchase, "nonmember"), 100);
/// ```
pub fn points(purchase: Money, tier: &str) -> i64 {
    LoyaltySchedule::default().points(purchase, tier)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_point_per_whole_dollar() {
        assert_eq!(points(Money::from_cents(10_000), "BRONZE"), 100);
        // cents are dropped, not rounded
        assert_eq!(points(Money::from_cents(10_099), "BRONZE"), 100);
        assert_eq!(points(Money::from_cents(99), "BRONZE"), 0);
    }

    #[test]
    fn test_tier_multipliers() {
        let purchase = Money::from_cents(10_000); // 100 base points
        assert_eq!(points(purchase, "BRONZE"), 100);
        assert_eq!(points(purchase, "SILVER"), 150);
        assert_eq!(points(purchase, "GOLD"), 200);
        assert_eq!(points(purchase, "PLATINUM"), 300);
        assert_eq!(points(purchase, "DIAMOND"), 500);
    }

    #[test]
    fn test_silver_truncates() {
        // $7 → 7 base points; 7 × 1.5 = 10.5 → 10
        assert_eq!(points(Money::from_cents(700), "SILVER"), 10);
    }

    #[test]
    fn test_unknown_tier_earns_base() {
        let purchase = Money::from_cents(4_200);
        assert_eq!(points(purchase, "COPPER"), 42);
        // matching is case-sensitive: "gold" is not "GOLD"
        assert_eq!(points(purchase, "gold"), 42);
        assert_eq!(points(purchase, ""), 42);
    }

    #[test]
    fn test_schedule_round_trips_as_json() {
        let schedule = LoyaltySchedule::default();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: LoyaltySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}

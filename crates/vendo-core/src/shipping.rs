//! # Shipping Quotes
//!
//! Computes shipping cost as a flat base plus a per-pound charge, scaled by
//! a destination zone multiplier.
//!
//! ```text
//! cost = (base + weight × per_pound) × zone_multiplier
//!
//! US ×1.0   CA ×1.5   UK ×2.0   AU ×2.5   anywhere else ×3.0
//! ```
//!
//! Destination codes are matched case-sensitively with no normalization;
//! an unknown code falls back to the explicit international multiplier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Multiplier;

/// Canonical zones as (code, per-mille multiplier).
const DEFAULT_ZONES: &[(&str, u32)] = &[
    ("US", 1_000),
    ("CA", 1_500),
    ("UK", 2_000),
    ("AU", 2_500),
];

/// Fallback multiplier for destinations not in the zone table.
const DEFAULT_INTERNATIONAL_PER_MILLE: u32 = 3_000;

// =============================================================================
// Rate Table
// =============================================================================

/// A shipping zone: destination code → cost multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingZone {
    /// Destination code, matched exactly (case-sensitive).
    pub code: String,
    pub multiplier: Multiplier,
}

/// The full shipping rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingRateTable {
    /// Flat cost charged on every shipment.
    pub base: Money,
    /// Charge per whole pound of shipment weight.
    pub per_pound: Money,
    pub zones: Vec<ShippingZone>,
    /// Applied when the destination matches no zone.
    pub international: Multiplier,
}

impl Default for ShippingRateTable {
    fn default() -> Self {
        ShippingRateTable {
            base: Money::from_cents(599),
            per_pound: Money::from_cents(75),
            zones: DEFAULT_ZONES
                .iter()
                .map(|&(code, per_mille)| ShippingZone {
                    code: code.to_string(),
                    multiplier: Multiplier::from_per_mille(per_mille),
                })
                .collect(),
            international: Multiplier::from_per_mille(DEFAULT_INTERNATIONAL_PER_MILLE),
        }
    }
}

impl ShippingRateTable {
    /// Returns the multiplier for a destination code.
    pub fn multiplier_for(&self, destination: &str) -> Multiplier {
        self.zones
            .iter()
            .find(|zone| zone.code == destination)
            .map(|zone| zone.multiplier)
            .unwrap_or(self.international)
    }

    /// Quotes shipping for a weight (whole pounds) and destination.
    ///
    /// Weight is not validated here; a caller wanting to reject negative
    /// weights runs [`crate::validation::validate_weight_lbs`] first.
    pub fn cost(&self, weight_lbs: i64, destination: &str) -> Money {
        let unscaled = self.base + self.per_pound * weight_lbs;
        unscaled.scale(self.multiplier_for(destination))
    }
}

// =============================================================================
// Convenience Entry Point
// =============================================================================

/// Shipping cost under the canonical rate table.
///
/// ```rust
/// use vendo_core::shipping;
///
/// // $5.99 base + 10 lb × $0.75 = $13.49 domestic
/// assert_eq!(shipping::cost(10, "US").cents(), 1_349);
/// ```
pub fn cost(weight_lbs: i64, destination: &str) -> Money {
    ShippingRateTable::default().cost(weight_lbs, destination)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domestic_base_only() {
        assert_eq!(cost(0, "US").cents(), 599);
    }

    #[test]
    fn test_domestic_with_weight() {
        assert_eq!(cost(10, "US").cents(), 599 + 750);
    }

    #[test]
    fn test_known_zones() {
        // (599 + 4×75) = 899 unscaled
        assert_eq!(cost(4, "CA").cents(), 1_349); // 899 × 1.5 = 1348.5 → 1349
        assert_eq!(cost(4, "UK").cents(), 1_798);
        assert_eq!(cost(4, "AU").cents(), 2_248); // 899 × 2.5 = 2247.5 → 2248
    }

    #[test]
    fn test_unknown_code_uses_international() {
        for w in [0, 1, 7, 10] {
            let unscaled = 599 + w * 75;
            assert_eq!(cost(w, "ZZ").cents(), unscaled * 3);
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        // "us" is not "US": falls through to international
        assert_eq!(cost(0, "us").cents(), 599 * 3);
    }

    #[test]
    fn test_table_round_trips_as_json() {
        let table = ShippingRateTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let back: ShippingRateTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}

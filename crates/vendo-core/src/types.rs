//! # Shared Rate Types
//!
//! Fixed-point fraction types used by every rule table.
//!
//! Two representations, two jobs:
//!
//! - [`Rate`]: a fraction of an amount in **basis points** (1 bps = 0.01%).
//!   Used where the result is a slice of the input: sales tax, discounts.
//!   825 bps = 8.25%.
//! - [`Multiplier`]: a scaling factor in **per-mille** (1000 = ×1.0).
//!   Used where the factor can exceed 1.0: shipping zones (×1.0..×3.0) and
//!   loyalty tiers (×1..×5).
//!
//! Both are plain integers under the hood, so rule tables stay exact and
//! serializable with no floating point anywhere in the arithmetic path.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Rate (basis points)
// =============================================================================

/// A fraction expressed in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 725 bps = 7.25% (e.g., California sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage (for convenience).
    pub fn from_percent(pct: f64) -> Self {
        Rate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Multiplier (per-mille)
// =============================================================================

/// A scaling factor expressed in per-mille (thousandths).
///
/// 1000 = ×1.0, 1500 = ×1.5, 3000 = ×3.0. Unlike [`Rate`], a multiplier
/// routinely exceeds 1.0, so it scales a value rather than slicing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Creates a multiplier from per-mille units.
    #[inline]
    pub const fn from_per_mille(per_mille: u32) -> Self {
        Multiplier(per_mille)
    }

    /// The identity multiplier (×1.0).
    #[inline]
    pub const fn identity() -> Self {
        Multiplier(1_000)
    }

    /// Returns the factor in per-mille units.
    #[inline]
    pub const fn per_mille(&self) -> u32 {
        self.0
    }

    /// Returns the factor as a float (for display only).
    #[inline]
    pub fn as_factor(&self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    /// Checks if this is the identity multiplier.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.0 == 1_000
    }
}

/// Default multiplier is the identity (×1.0).
impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::identity()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(725);
        assert_eq!(rate.bps(), 725);
        assert!((rate.percent() - 7.25).abs() < 0.001);
    }

    #[test]
    fn test_rate_from_percent() {
        assert_eq!(Rate::from_percent(8.25).bps(), 825);
        assert_eq!(Rate::from_percent(5.0).bps(), 500);
    }

    #[test]
    fn test_rate_default_is_zero() {
        assert!(Rate::default().is_zero());
    }

    #[test]
    fn test_multiplier_identity() {
        let m = Multiplier::default();
        assert!(m.is_identity());
        assert_eq!(m.per_mille(), 1_000);
    }

    #[test]
    fn test_multiplier_as_factor() {
        let m = Multiplier::from_per_mille(2_500);
        assert!((m.as_factor() - 2.5).abs() < 0.001);
    }
}

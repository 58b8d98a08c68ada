//! # Sales Tax Table
//!
//! Maps a region (US state) code to a sales tax [`Rate`].
//!
//! The table is total: the no-sales-tax states carry explicit zero entries,
//! and every code not listed falls back to the default rate. Codes are
//! matched case-sensitively with no normalization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Rate;

/// Canonical rates as (state code, bps). Zero entries are the
/// no-sales-tax states, listed explicitly rather than special-cased.
const DEFAULT_RATES: &[(&str, u32)] = &[
    ("CA", 725),
    ("NY", 800),
    ("TX", 625),
    ("FL", 600),
    ("WA", 650),
    ("OR", 0),
    ("NH", 0),
    ("MT", 0),
];

/// Rate applied to states not in the table (5%).
const DEFAULT_FALLBACK_BPS: u32 = 500;

// =============================================================================
// Tax Table
// =============================================================================

/// One row of the tax table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionRate {
    /// Region code, matched exactly (case-sensitive).
    pub code: String,
    pub rate: Rate,
}

/// Region code → tax rate, with an explicit default branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxTable {
    pub rates: Vec<RegionRate>,
    /// Applied to any region not listed in `rates`.
    pub default_rate: Rate,
}

impl Default for TaxTable {
    fn default() -> Self {
        TaxTable {
            rates: DEFAULT_RATES
                .iter()
                .map(|&(code, bps)| RegionRate {
                    code: code.to_string(),
                    rate: Rate::from_bps(bps),
                })
                .collect(),
            default_rate: Rate::from_bps(DEFAULT_FALLBACK_BPS),
        }
    }
}

impl TaxTable {
    /// Returns the tax rate for a region code.
    pub fn rate_for(&self, region: &str) -> Rate {
        self.rates
            .iter()
            .find(|row| row.code == region)
            .map(|row| row.rate)
            .unwrap_or(self.default_rate)
    }

    /// Returns the tax owed on an amount in a region.
    pub fn sales_tax(&self, amount: Money, region: &str) -> Money {
        amount.rate_portion(self.rate_for(region))
    }
}

// =============================================================================
// Convenience Entry Point
// =============================================================================

/// Sales tax under the canonical table.
///
/// ```rust
/// use vendo_core::money::Money;
/// use vendo_core::tax;
///
/// let amount = Money::from_cents(10_000); // $100.00
/// assert_eq!(tax::sales_tax(amount, "NY").cents(), 800);
/// assert_eq!(tax::sales_tax(amount, "OR").cents(), 0);
/// ```
pub fn sales_tax(amount: Money, region: &str) -> Money {
    TaxTable::default().sales_tax(amount, region)
}

// =============================================================================
// Unit Tests
// =============================================================================

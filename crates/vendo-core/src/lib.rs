//! # vendo-core: Pure Checkout Rules for Vendo
//!
//! This crate is the **heart** of Vendo. It contains every checkout business
//! rule as pure functions over declarative rule tables, with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Vendo Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │              Callers (checkout flow, admin tools)             │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │ plain function calls              │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               ★ vendo-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │   ┌────────┐ ┌──────────┐ ┌───────┐ ┌─────────┐ ┌─────────┐  │ │
//! │  │   │ money  │ │ discount │ │  tax  │ │ loyalty │ │ refund  │  │ │
//! │  │   └────────┘ └──────────┘ └───────┘ └─────────┘ └─────────┘  │ │
//! │  │   ┌──────────┐ ┌────────┐ ┌────────┐ ┌──────────────┐       │ │
//! │  │   │ shipping │ │  card  │ │ status │ │ subscription │       │ │
//! │  │   └──────────┘ └────────┘ └────────┘ └──────────────┘       │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Shared rate types ([`types::Rate`], [`types::Multiplier`])
//! - [`error`] - Validation error types
//! - [`validation`] - Opt-in input validation for callers
//! - [`discount`] - Customer-level discount schedule
//! - [`shipping`] - Zone-multiplied shipping quotes
//! - [`status`] - Order status codes and labels
//! - [`card`] - Card number prefix/length rules
//! - [`tax`] - Per-region sales tax table
//! - [`loyalty`] - Loyalty point multipliers
//! - [`refund`] - Refund policy guards
//! - [`subscription`] - Subscription plan pricing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Rules**: Every rule table carries an explicit default branch, so
//!    evaluation never fails on an unrecognized input
//! 5. **Declared Order**: Where a table matches first-hit (discount tiers,
//!    card prefixes, duration discounts), the order is part of the contract
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_core::money::Money;
//! use vendo_core::{discount, tax};
//!
//! // $200.00 order from a level-5 customer: 25% off
//! let total = Money::from_cents(20_000);
//! assert_eq!(discount::amount(total, 5).cents(), 5_000);
//!
//! // $100.00 taxed in New York at 8%
//! let amount = Money::from_cents(10_000);
//! assert_eq!(tax::sales_tax(amount, "NY").cents(), 800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod card;
pub mod discount;
pub mod error;
pub mod loyalty;
pub mod money;
pub mod refund;
pub mod shipping;
pub mod status;
pub mod subscription;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Money` instead of
// `use vendo_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use status::OrderStatus;
pub use types::{Multiplier, Rate};

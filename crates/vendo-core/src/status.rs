//! # Order Status Codes
//!
//! Maps legacy integer status codes to status labels. The wire format uses
//! SCREAMING_SNAKE_CASE labels; any code outside the known range maps to the
//! sentinel [`UNKNOWN_LABEL`] rather than failing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Label returned for codes with no known status.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order placed, payment not yet captured.
    Pending,
    /// Payment captured, order being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Confirmed received.
    Delivered,
    /// Cancelled before shipment.
    Cancelled,
    /// Refunded after the fact.
    Refunded,
}

impl OrderStatus {
    /// Decodes a legacy integer status code.
    ///
    /// Returns `None` for codes outside 0..=5.
    pub const fn from_code(code: i32) -> Option<OrderStatus> {
        match code {
            0 => Some(OrderStatus::Pending),
            1 => Some(OrderStatus::Processing),
            2 => Some(OrderStatus::Shipped),
            3 => Some(OrderStatus::Delivered),
            4 => Some(OrderStatus::Cancelled),
            5 => Some(OrderStatus::Refunded),
            _ => None,
        }
    }

    /// The legacy integer code for this status.
    pub const fn code(&self) -> i32 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Processing => 1,
            OrderStatus::Shipped => 2,
            OrderStatus::Delivered => 3,
            OrderStatus::Cancelled => 4,
            OrderStatus::Refunded => 5,
        }
    }

    /// The wire label for this status.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Refunded => "REFUNDED",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Convenience Entry Point
// =============================================================================

/// Total code → label lookup: unknown codes map to [`UNKNOWN_LABEL`].
///
/// ```rust
/// use vendo_core::status;
///
/// assert_eq!(status::label_for(2), "SHIPPED");
/// assert_eq!(status::label_for(99), "UNKNOWN");
/// ```
pub const fn label_for(code: i32) -> &'static str {
    match OrderStatus::from_code(code) {
        Some(status) => status.label(),
        None => UNKNOWN_LABEL,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let expected = [
            "PENDING",
            "PROCESSING",
            "SHIPPED",
            "DELIVERED",
            "CANCELLED",
            "REFUNDED",
        ];
        for (code, label) in expected.iter().enumerate() {
            assert_eq!(label_for(code as i32), *label);
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(label_for(99), UNKNOWN_LABEL);
        assert_eq!(label_for(-1), UNKNOWN_LABEL);
        assert_eq!(label_for(6), UNKNOWN_LABEL);
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..=5 {
            let status = OrderStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"SHIPPED\"");
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}

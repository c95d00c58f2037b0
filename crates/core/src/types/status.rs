//! Status enums for order exports.
//!
//! These mirror the enumerated status fields on the Qayd platform's public
//! order-export payload. The web crates only read them; there is no
//! client-side transition logic.

use serde::{Deserialize, Serialize};

/// Overall order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    PartiallyRefunded,
    Refunded,
    Failed,
}

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentMethod {
    #[default]
    InStore,
    Pickup,
    Delivery,
    DineIn,
}

/// Progress of fulfillment for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentStatus {
    #[default]
    Unfulfilled,
    InProgress,
    Fulfilled,
    Cancelled,
}

/// Status of an individual refund record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let status: OrderStatus = serde_json::from_str("\"COMPLETED\"").expect("valid status");
        assert_eq!(status, OrderStatus::Completed);

        let method: FulfillmentMethod =
            serde_json::from_str("\"DINE_IN\"").expect("valid method");
        assert_eq!(method, FulfillmentMethod::DineIn);

        let payment: PaymentStatus =
            serde_json::from_str("\"PARTIALLY_REFUNDED\"").expect("valid payment status");
        assert_eq!(payment, PaymentStatus::PartiallyRefunded);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<OrderStatus>("\"ARCHIVED\"").is_err());
    }
}

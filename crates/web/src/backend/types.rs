//! Wire types for the Qayd platform's public REST API.
//!
//! The order export is a read-only, receipt-oriented projection of an order.
//! It is consumed as-is: this crate never mutates or writes these records
//! back, and all monetary fields are backend-computed display values.

use chrono::{DateTime, Utc};
use qayd_core::{
    FulfillmentMethod, FulfillmentStatus, Locale, OrderStatus, PaymentStatus, RefundStatus,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A public order export, scoped for unauthenticated receipt display.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderExportData {
    pub id: String,
    pub order_number: String,
    pub created_at: DateTime<Utc>,
    /// ISO 4217 code applied to every amount on this record.
    pub currency_code: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub fulfillment_method: FulfillmentMethod,
    pub fulfillment_status: FulfillmentStatus,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub items: Vec<LineItem>,
    pub subtotal_amount: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
    #[serde(default)]
    pub tax_amount: Decimal,
    #[serde(default)]
    pub fees_amount: Decimal,
    pub total_amount: Decimal,
    #[serde(default)]
    pub amount_refunded: Decimal,
    pub store: StoreIdentity,
    #[serde(default)]
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(default)]
    pub refunds: Vec<Refund>,
}

impl OrderExportData {
    /// Net payable amount after refunds.
    ///
    /// Never negative in well-formed data; this is a display consumer and
    /// does not re-validate the backend's arithmetic.
    #[must_use]
    pub fn net_payable(&self) -> Decimal {
        self.total_amount - self.amount_refunded
    }

    /// Whether any amount has been refunded.
    #[must_use]
    pub fn has_refund(&self) -> bool {
        self.amount_refunded > Decimal::ZERO
    }
}

/// A single order line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    #[serde(default)]
    pub variant: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub line_discount: Decimal,
    #[serde(default)]
    pub line_tax: Decimal,
    pub line_total: Decimal,
}

/// Store identity embedded in the export for receipt branding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreIdentity {
    pub name: String,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub show_tax_number: bool,
    #[serde(default = "default_true")]
    pub show_contact: bool,
    #[serde(default)]
    pub footer_text: Option<String>,
}

const fn default_true() -> bool {
    true
}

/// Delivery destination, present only on delivery orders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    pub city: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A refund applied to an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub amount: Decimal,
    pub status: RefundStatus,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A subscription plan from the public plans endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_monthly: Decimal,
    pub currency_code: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

/// What a contact submission is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InquiryKind {
    #[default]
    General,
    Demo,
    Support,
}

/// Lead-capture payload posted to the platform's contact endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub kind: InquiryKind,
    pub message: String,
    /// Locale the visitor was browsing in, so replies match their language.
    pub locale: Locale,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_export_json() -> &'static str {
        r#"{
            "id": "0b5fa13e-6a1c-4d42-9f8e-2a7f40d35a11",
            "orderNumber": "1042",
            "createdAt": "2026-03-14T09:30:00Z",
            "currencyCode": "SAR",
            "status": "COMPLETED",
            "paymentStatus": "PAID",
            "fulfillmentMethod": "DELIVERY",
            "fulfillmentStatus": "FULFILLED",
            "customerName": "Noor A.",
            "items": [
                {
                    "name": "Flat white",
                    "variant": "Large",
                    "quantity": 2,
                    "unitPrice": "18.00",
                    "lineDiscount": "0.00",
                    "lineTax": "5.40",
                    "lineTotal": "41.40"
                }
            ],
            "subtotalAmount": "36.00",
            "taxAmount": "5.40",
            "totalAmount": "41.40",
            "store": {
                "name": "Dune Coffee",
                "taxNumber": "310123456700003",
                "showTaxNumber": true
            },
            "deliveryAddress": {
                "line1": "12 Olaya St",
                "city": "Riyadh"
            },
            "refunds": []
        }"#
    }

    #[test]
    fn test_deserialize_full_export() {
        let order: OrderExportData = serde_json::from_str(full_export_json()).unwrap();
        assert_eq!(order.order_number, "1042");
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.fulfillment_method, FulfillmentMethod::Delivery);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert!(order.delivery_address.is_some());
        assert!(order.refunds.is_empty());
        // Branding toggle defaults: contact shown unless the store hides it
        assert!(order.store.show_contact);
    }

    #[test]
    fn test_deserialize_minimal_export() {
        // Optional fields absent entirely; amounts as JSON numbers.
        let json = r#"{
            "id": "7f3b2c10-90ab-4cde-8123-456789abcdef",
            "orderNumber": "7",
            "createdAt": "2026-01-02T12:00:00Z",
            "currencyCode": "USD",
            "status": "PENDING",
            "paymentStatus": "PENDING",
            "fulfillmentMethod": "IN_STORE",
            "fulfillmentStatus": "UNFULFILLED",
            "items": [],
            "subtotalAmount": 10,
            "totalAmount": 10,
            "store": { "name": "Corner Shop" }
        }"#;
        let order: OrderExportData = serde_json::from_str(json).unwrap();
        assert!(order.customer_name.is_none());
        assert!(order.delivery_address.is_none());
        assert!(order.refunds.is_empty());
        assert_eq!(order.amount_refunded, Decimal::ZERO);
        assert!(!order.has_refund());
    }

    #[test]
    fn test_net_payable() {
        let mut order: OrderExportData = serde_json::from_str(full_export_json()).unwrap();
        order.amount_refunded = Decimal::new(1_000, 2); // 10.00
        assert_eq!(order.net_payable(), Decimal::new(3_140, 2)); // 31.40
        assert!(order.has_refund());
    }

    #[test]
    fn test_contact_submission_wire_shape() {
        let submission = ContactSubmission {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            phone: None,
            company: None,
            kind: InquiryKind::Demo,
            message: "We run three branches.".to_string(),
            locale: Locale::Ar,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["kind"], "demo");
        assert_eq!(json["locale"], "ar");
        assert!(json.get("phone").is_none());
    }
}

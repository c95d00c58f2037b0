//! Public digital receipt viewer.
//!
//! `GET /export/orders/{order_id}?storeId=...` renders a read-only receipt
//! for an order export. The flow is a single pass: validate the ID shape,
//! fetch the export fresh (never cached - refunds applied after the original
//! sale must show), then map the record to a fixed sequence of sections.
//!
//! Section order: store header, order summary, items, pricing breakdown,
//! delivery address (delivery orders with an address only), notes, refunds
//! (only when any exist), store footer.

use std::sync::LazyLock;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header::CACHE_CONTROL},
    response::{Html, IntoResponse, Response},
};
use qayd_core::{
    FulfillmentMethod, FulfillmentStatus, Locale, OrderStatus, PaymentStatus, RefundStatus,
    format_amount,
};
use regex::Regex;
use serde::Deserialize;
use tracing::instrument;

use crate::backend::{DeliveryAddress, ExportErrorCode, OrderExportData};
use crate::error::AppError;
use crate::i18n::Prefs;
use crate::i18n::messages::{self, ReceiptLabels};
use crate::state::AppState;

/// Order IDs must be UUID-shaped: 8-4-4-4-12 hex groups.
///
/// Anything else short-circuits to a not-found outcome without a network
/// call. Deliberately stricter than general UUID parsing, which also accepts
/// un-hyphenated and URN forms.
static ORDER_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("valid order id regex")
});

/// Whether a path segment has the export ID shape.
#[must_use]
pub fn is_valid_order_id(id: &str) -> bool {
    ORDER_ID_RE.is_match(id)
}

/// Query params for the receipt page.
#[derive(Debug, Deserialize)]
pub struct ReceiptQuery {
    /// Forwarded to the backend as the store-scoping header.
    #[serde(rename = "storeId")]
    pub store_id: Option<String>,
}

// =============================================================================
// View Model
// =============================================================================

/// A localized status label with its visual tone.
#[derive(Debug, Clone)]
pub struct StatusBadge {
    pub label: &'static str,
    /// CSS class suffix: `success`, `warning`, `danger` or `neutral`.
    pub tone: &'static str,
}

/// Store identity shown at the top of the receipt.
#[derive(Debug, Clone)]
pub struct StoreHeaderView {
    pub name: String,
    pub legal_name: Option<String>,
    /// Contact lines (phone, email), empty when the store hides contact info.
    pub contact: Vec<String>,
    /// Present only when the store opts into showing its tax number.
    pub tax_number: Option<String>,
}

/// Order summary block.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub order_number: String,
    pub date: String,
    pub customer: Option<String>,
    pub status: StatusBadge,
    pub payment: StatusBadge,
    pub method_label: &'static str,
    pub fulfillment: StatusBadge,
}

/// One line in the items table.
#[derive(Debug, Clone)]
pub struct LineItemView {
    pub name: String,
    pub variant: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Pricing breakdown rows. Optional rows are omitted when zero.
#[derive(Debug, Clone)]
pub struct PricingView {
    pub subtotal: String,
    pub discount: Option<String>,
    pub tax: String,
    pub fees: Option<String>,
    pub total: String,
    /// Populated together with `net_total` iff any amount was refunded.
    pub refunded: Option<String>,
    pub net_total: Option<String>,
}

/// Delivery destination block.
#[derive(Debug, Clone)]
pub struct AddressView {
    pub lines: Vec<String>,
    pub phone: Option<String>,
}

impl From<&DeliveryAddress> for AddressView {
    fn from(address: &DeliveryAddress) -> Self {
        let mut lines = vec![address.line1.clone()];
        if let Some(line2) = &address.line2 {
            lines.push(line2.clone());
        }
        let locality: Vec<&str> = [
            address.district.as_deref(),
            Some(address.city.as_str()),
            address.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        lines.push(locality.join(", "));

        Self {
            lines,
            phone: address.phone.clone(),
        }
    }
}

/// One refund entry.
#[derive(Debug, Clone)]
pub struct RefundView {
    pub amount: String,
    pub status: StatusBadge,
    pub reason: Option<String>,
    pub date: String,
}

/// The complete receipt document, in render order.
#[derive(Debug, Clone)]
pub struct ReceiptView {
    pub store: StoreHeaderView,
    pub summary: SummaryView,
    pub items: Vec<LineItemView>,
    pub pricing: PricingView,
    pub delivery: Option<AddressView>,
    pub note: Option<String>,
    pub refunds: Vec<RefundView>,
    pub footer_text: Option<String>,
}

impl ReceiptView {
    /// Map an order export to its receipt document.
    ///
    /// Pure and stateless; all conditional sections are decided here, not in
    /// the template.
    #[must_use]
    pub fn from_order(order: &OrderExportData, locale: Locale) -> Self {
        let currency = order.currency_code.as_str();

        let store = StoreHeaderView {
            name: order.store.name.clone(),
            legal_name: order.store.legal_name.clone(),
            contact: if order.store.show_contact {
                [order.store.phone.clone(), order.store.email.clone()]
                    .into_iter()
                    .flatten()
                    .collect()
            } else {
                Vec::new()
            },
            tax_number: order
                .store
                .show_tax_number
                .then(|| order.store.tax_number.clone())
                .flatten(),
        };

        let summary = SummaryView {
            order_number: order.order_number.clone(),
            date: order.created_at.format("%Y-%m-%d %H:%M").to_string(),
            customer: order.customer_name.clone(),
            status: StatusBadge {
                label: messages::order_status_label(locale, order.status),
                tone: order_status_tone(order.status),
            },
            payment: StatusBadge {
                label: messages::payment_status_label(locale, order.payment_status),
                tone: payment_status_tone(order.payment_status),
            },
            method_label: messages::fulfillment_method_label(locale, order.fulfillment_method),
            fulfillment: StatusBadge {
                label: messages::fulfillment_status_label(locale, order.fulfillment_status),
                tone: fulfillment_status_tone(order.fulfillment_status),
            },
        };

        let items = order
            .items
            .iter()
            .map(|item| LineItemView {
                name: item.name.clone(),
                variant: item.variant.clone(),
                quantity: item.quantity,
                unit_price: format_amount(currency, item.unit_price),
                line_total: format_amount(currency, item.line_total),
            })
            .collect();

        let has_refund = order.has_refund();
        let pricing = PricingView {
            subtotal: format_amount(currency, order.subtotal_amount),
            discount: (order.discount_amount > rust_decimal::Decimal::ZERO)
                .then(|| format_amount(currency, order.discount_amount)),
            tax: format_amount(currency, order.tax_amount),
            fees: (order.fees_amount > rust_decimal::Decimal::ZERO)
                .then(|| format_amount(currency, order.fees_amount)),
            total: format_amount(currency, order.total_amount),
            refunded: has_refund.then(|| format_amount(currency, order.amount_refunded)),
            net_total: has_refund.then(|| format_amount(currency, order.net_payable())),
        };

        // Address renders only for delivery orders, even if the record
        // carries a leftover address from an edited order.
        let delivery = (order.fulfillment_method == FulfillmentMethod::Delivery)
            .then(|| order.delivery_address.as_ref().map(AddressView::from))
            .flatten();

        let refunds = order
            .refunds
            .iter()
            .map(|refund| RefundView {
                amount: format_amount(currency, refund.amount),
                status: StatusBadge {
                    label: messages::refund_status_label(locale, refund.status),
                    tone: refund_status_tone(refund.status),
                },
                reason: refund.reason.clone(),
                date: refund.created_at.format("%Y-%m-%d").to_string(),
            })
            .collect();

        Self {
            store,
            summary,
            items,
            pricing,
            delivery,
            note: order.note.clone(),
            refunds,
            footer_text: order.store.footer_text.clone(),
        }
    }
}

// =============================================================================
// Status Tones
// =============================================================================

const fn order_status_tone(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "success",
        OrderStatus::Cancelled => "danger",
        _ => "warning",
    }
}

const fn payment_status_tone(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "success",
        PaymentStatus::Failed => "danger",
        _ => "warning",
    }
}

const fn fulfillment_status_tone(status: FulfillmentStatus) -> &'static str {
    match status {
        FulfillmentStatus::Fulfilled => "success",
        FulfillmentStatus::Cancelled => "danger",
        _ => "warning",
    }
}

const fn refund_status_tone(status: RefundStatus) -> &'static str {
    match status {
        RefundStatus::Completed => "success",
        RefundStatus::Failed => "danger",
        RefundStatus::Pending => "warning",
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Receipt document template. Standalone print-style layout, not the site
/// chrome: the header and footer belong to the store, not to Qayd.
#[derive(Template)]
#[template(path = "receipt/show.html")]
pub struct ReceiptTemplate {
    pub lang: &'static str,
    pub dir: &'static str,
    pub theme: &'static str,
    pub labels: ReceiptLabels,
    pub view: ReceiptView,
}

/// Receipt error view: localized message, stable code and a go-back action.
#[derive(Template)]
#[template(path = "receipt/error.html")]
pub struct ReceiptErrorTemplate {
    pub lang: &'static str,
    pub dir: &'static str,
    pub theme: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub code: &'static str,
    pub go_back: &'static str,
}

// =============================================================================
// Handler
// =============================================================================

/// Display a receipt.
///
/// GET /export/orders/{order_id}?storeId={store_id}
#[instrument(skip(state), fields(order_id = %order_id))]
pub async fn show(
    State(state): State<AppState>,
    prefs: Prefs,
    Path(order_id): Path<String>,
    Query(query): Query<ReceiptQuery>,
) -> Response {
    // Malformed IDs resolve before any network call.
    if !is_valid_order_id(&order_id) {
        tracing::debug!("Rejected malformed order id");
        return error_response(prefs, ExportErrorCode::OrderNotFound);
    }

    let result = state
        .backend()
        .fetch_order_export(&order_id, prefs.locale, query.store_id.as_deref())
        .await;

    match result.order {
        Some(order) => {
            let view = ReceiptView::from_order(&order, prefs.locale);
            let page = ReceiptTemplate {
                lang: prefs.locale.tag(),
                dir: prefs.locale.dir().as_str(),
                theme: prefs.theme.as_str(),
                labels: messages::receipt(prefs.locale),
                view,
            };
            match page.render() {
                // Receipts must always reflect current state.
                Ok(html) => ([(CACHE_CONTROL, "no-store")], Html(html)).into_response(),
                Err(e) => AppError::Template(e).into_response(),
            }
        }
        None => error_response(
            prefs,
            result.error_code.unwrap_or(ExportErrorCode::Unknown),
        ),
    }
}

/// Render the error view for a fetch outcome.
fn error_response(prefs: Prefs, code: ExportErrorCode) -> Response {
    let status = match code {
        ExportErrorCode::OrderNotFound | ExportErrorCode::InvalidStore => StatusCode::NOT_FOUND,
        ExportErrorCode::FetchError => StatusCode::BAD_GATEWAY,
        ExportErrorCode::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let errors = messages::errors(prefs.locale);

    let page = ReceiptErrorTemplate {
        lang: prefs.locale.tag(),
        dir: prefs.locale.dir().as_str(),
        theme: prefs.theme.as_str(),
        title: errors.title,
        message: messages::export_error_message(prefs.locale, code),
        code: code.as_str(),
        go_back: errors.go_back,
    };

    match page.render() {
        Ok(html) => (status, [(CACHE_CONTROL, "no-store")], Html(html)).into_response(),
        Err(e) => AppError::Template(e).into_response(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use qayd_core::Theme;
    use rust_decimal::Decimal;

    use crate::backend::{LineItem, Refund, StoreIdentity};

    fn sample_order() -> OrderExportData {
        OrderExportData {
            id: "0b5fa13e-6a1c-4d42-9f8e-2a7f40d35a11".to_string(),
            order_number: "1042".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            currency_code: "USD".to_string(),
            status: OrderStatus::Completed,
            payment_status: PaymentStatus::Paid,
            fulfillment_method: FulfillmentMethod::Pickup,
            fulfillment_status: FulfillmentStatus::Fulfilled,
            customer_name: Some("Noor A.".to_string()),
            note: None,
            items: vec![LineItem {
                name: "Flat white".to_string(),
                variant: Some("Large".to_string()),
                quantity: 2,
                unit_price: Decimal::new(900, 2),
                line_discount: Decimal::ZERO,
                line_tax: Decimal::new(270, 2),
                line_total: Decimal::new(2_070, 2),
            }],
            subtotal_amount: Decimal::new(1_800, 2),
            discount_amount: Decimal::ZERO,
            tax_amount: Decimal::new(270, 2),
            fees_amount: Decimal::ZERO,
            total_amount: Decimal::new(2_070, 2),
            amount_refunded: Decimal::ZERO,
            store: StoreIdentity {
                name: "Dune Coffee".to_string(),
                legal_name: None,
                phone: Some("+966 55 000 0000".to_string()),
                email: None,
                tax_number: Some("310123456700003".to_string()),
                show_tax_number: true,
                show_contact: true,
                footer_text: None,
            },
            delivery_address: None,
            refunds: vec![],
        }
    }

    fn render(view: ReceiptView) -> String {
        ReceiptTemplate {
            lang: "en",
            dir: "ltr",
            theme: Theme::Light.as_str(),
            labels: messages::receipt(Locale::En),
            view,
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_order_id_shape() {
        assert!(is_valid_order_id("0b5fa13e-6a1c-4d42-9f8e-2a7f40d35a11"));
        assert!(is_valid_order_id("ABCDEF01-2345-6789-abcd-ef0123456789"));

        assert!(!is_valid_order_id(""));
        assert!(!is_valid_order_id("not-an-id"));
        assert!(!is_valid_order_id("0b5fa13e6a1c4d429f8e2a7f40d35a11")); // no hyphens
        assert!(!is_valid_order_id("0b5fa13e-6a1c-4d42-9f8e-2a7f40d35a1")); // short
        assert!(!is_valid_order_id("0b5fa13e-6a1c-4d42-9f8e-2a7f40d35a11x")); // trailing junk
        assert!(!is_valid_order_id("zb5fa13e-6a1c-4d42-9f8e-2a7f40d35a11")); // non-hex
    }

    #[test]
    fn test_no_refund_renders_single_total_line() {
        let view = ReceiptView::from_order(&sample_order(), Locale::En);
        assert!(view.pricing.refunded.is_none());
        assert!(view.pricing.net_total.is_none());

        let html = render(view);
        assert!(html.contains("pricing-total"));
        assert!(!html.contains("pricing-net-total"));
        assert!(!html.contains("pricing-refunded"));
    }

    #[test]
    fn test_partial_refund_renders_gross_and_net() {
        let mut order = sample_order();
        order.amount_refunded = Decimal::new(500, 2); // $5.00
        let view = ReceiptView::from_order(&order, Locale::En);
        assert_eq!(view.pricing.total, "$20.70");
        assert_eq!(view.pricing.refunded.as_deref(), Some("$5.00"));
        assert_eq!(view.pricing.net_total.as_deref(), Some("$15.70"));

        let html = render(view);
        assert!(html.contains("pricing-total"));
        assert!(html.contains("pricing-net-total"));
        assert!(html.contains("$15.70"));
    }

    #[test]
    fn test_delivery_section_requires_delivery_method() {
        // Address present but method is pickup: section omitted.
        let mut order = sample_order();
        order.delivery_address = Some(DeliveryAddress {
            line1: "12 Olaya St".to_string(),
            line2: None,
            district: Some("Olaya".to_string()),
            city: "Riyadh".to_string(),
            country: None,
            phone: None,
        });
        let view = ReceiptView::from_order(&order, Locale::En);
        assert!(view.delivery.is_none());
        let html = render(view);
        assert!(!html.contains("section-delivery"));

        // Same order as delivery: section renders.
        order.fulfillment_method = FulfillmentMethod::Delivery;
        let view = ReceiptView::from_order(&order, Locale::En);
        let address = view.delivery.clone().unwrap();
        assert_eq!(address.lines, vec!["12 Olaya St", "Olaya, Riyadh"]);
        let html = render(view);
        assert!(html.contains("section-delivery"));
    }

    #[test]
    fn test_delivery_method_without_address_omits_section() {
        let mut order = sample_order();
        order.fulfillment_method = FulfillmentMethod::Delivery;
        order.delivery_address = None;
        let view = ReceiptView::from_order(&order, Locale::En);
        assert!(view.delivery.is_none());
    }

    #[test]
    fn test_empty_refund_list_omits_section() {
        let view = ReceiptView::from_order(&sample_order(), Locale::En);
        assert!(view.refunds.is_empty());
        let html = render(view);
        assert!(!html.contains("section-refunds"));
    }

    #[test]
    fn test_refund_entries_render() {
        let mut order = sample_order();
        order.amount_refunded = Decimal::new(2_070, 2);
        order.payment_status = PaymentStatus::Refunded;
        order.refunds = vec![Refund {
            amount: Decimal::new(2_070, 2),
            status: RefundStatus::Completed,
            reason: Some("Order cancelled".to_string()),
            created_at: Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0).unwrap(),
        }];
        let view = ReceiptView::from_order(&order, Locale::En);
        assert_eq!(view.refunds.len(), 1);
        assert_eq!(view.pricing.net_total.as_deref(), Some("$0.00"));

        let html = render(view);
        assert!(html.contains("section-refunds"));
        assert!(html.contains("Order cancelled"));
    }

    #[test]
    fn test_note_section_conditional() {
        let view = ReceiptView::from_order(&sample_order(), Locale::En);
        let html = render(view);
        assert!(!html.contains("section-notes"));

        let mut order = sample_order();
        order.note = Some("Extra hot, no lid.".to_string());
        let html = render(ReceiptView::from_order(&order, Locale::En));
        assert!(html.contains("section-notes"));
        assert!(html.contains("Extra hot, no lid."));
    }

    #[test]
    fn test_store_branding_toggles() {
        let mut order = sample_order();
        order.store.show_contact = false;
        order.store.show_tax_number = false;
        let view = ReceiptView::from_order(&order, Locale::En);
        assert!(view.store.contact.is_empty());
        assert!(view.store.tax_number.is_none());
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(order_status_tone(OrderStatus::Completed), "success");
        assert_eq!(order_status_tone(OrderStatus::Cancelled), "danger");
        assert_eq!(order_status_tone(OrderStatus::Pending), "warning");
        assert_eq!(payment_status_tone(PaymentStatus::Refunded), "warning");
        assert_eq!(refund_status_tone(RefundStatus::Failed), "danger");
    }

    #[test]
    fn test_arabic_receipt_renders_rtl_labels() {
        let view = ReceiptView::from_order(&sample_order(), Locale::Ar);
        assert_eq!(view.summary.status.label, "مكتمل");
        let html = ReceiptTemplate {
            lang: "ar",
            dir: "rtl",
            theme: Theme::Light.as_str(),
            labels: messages::receipt(Locale::Ar),
            view,
        }
        .render()
        .unwrap();
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("إيصال"));
    }

    #[test]
    fn test_error_view_order_not_found() {
        let page = ReceiptErrorTemplate {
            lang: "en",
            dir: "ltr",
            theme: Theme::Light.as_str(),
            title: messages::errors(Locale::En).title,
            message: messages::export_error_message(Locale::En, ExportErrorCode::OrderNotFound),
            code: ExportErrorCode::OrderNotFound.as_str(),
            go_back: messages::errors(Locale::En).go_back,
        };
        let html = page.render().unwrap();
        assert!(html.contains("ORDER_NOT_FOUND"));
        assert!(html.contains("We couldn&#x27;t find this order")
            || html.contains("We couldn't find this order"));
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found_without_fetch() {
        // The backend base URL is unroutable; a 404 outcome therefore proves
        // the guard rejected the ID before any fetch was attempted (a fetch
        // would classify as FETCH_ERROR / 502 instead).
        let config = crate::config::SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost".to_string(),
            api_base_url: "http://127.0.0.1:1".to_string(),
            portal_base_url: "http://localhost".to_string(),
            cookie_domain: None,
            default_locale: Locale::En,
            contact: crate::config::ContactConfig {
                email: "hello@qayd.app".to_string(),
                phone: None,
            },
            analytics: crate::config::AnalyticsConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };
        let state = AppState::new(config, std::path::Path::new("/nonexistent/for/test")).unwrap();
        let prefs = Prefs {
            locale: Locale::En,
            theme: Theme::Light,
        };

        let response = show(
            State(state),
            prefs,
            Path("definitely-not-a-uuid".to_string()),
            Query(ReceiptQuery { store_id: None }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

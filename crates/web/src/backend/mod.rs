//! REST client for the Qayd platform's public API.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest` - the platform is the source of truth, no
//!   local sync
//! - Order exports are always fetched fresh so receipts reflect refunds
//!   applied after the order was placed
//! - Plans are cached per-locale via `moka` (5 minute TTL)
//!
//! The client exposes two shapes for the export fetch: [`BackendClient::order_export`]
//! returns `Result` and is internal; [`BackendClient::fetch_order_export`]
//! never fails and returns a discriminated [`OrderExportResult`] for
//! presentation code.

pub mod types;

pub use types::*;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use qayd_core::Locale;
use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::SiteConfig;

/// Header that scopes an export fetch to a store.
pub const STORE_ID_HEADER: &str = "X-Store-Id";

/// Plans cache time-to-live.
const PLANS_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when calling the platform API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Error codes surfaced to the receipt error view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportErrorCode {
    OrderNotFound,
    InvalidStore,
    FetchError,
    Unknown,
}

impl ExportErrorCode {
    /// Stable identifier rendered alongside the localized message.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::InvalidStore => "INVALID_STORE",
            Self::FetchError => "FETCH_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }
}

impl From<&BackendError> for ExportErrorCode {
    fn from(err: &BackendError) -> Self {
        match err {
            BackendError::NotFound(_) => Self::OrderNotFound,
            // The export endpoint rejects a bad store scope with 400/403;
            // 404 is the only other client error it produces.
            BackendError::Api { status: 400 | 403, .. } => Self::InvalidStore,
            BackendError::Api { status, .. } if *status >= 500 => Self::FetchError,
            BackendError::Http(_) => Self::FetchError,
            BackendError::Api { .. } | BackendError::Parse(_) => Self::Unknown,
        }
    }
}

/// Outcome of a receipt fetch, consumed by presentation code.
///
/// Exactly one of `order` / `error_code` is populated; the UI layer never
/// needs exception handling.
#[derive(Debug)]
pub struct OrderExportResult {
    pub order: Option<OrderExportData>,
    pub error: Option<String>,
    pub error_code: Option<ExportErrorCode>,
}

/// Error envelope on non-2xx responses: `{ message, details }`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    #[allow(dead_code)]
    details: Option<serde_json::Value>,
}

/// Successful payloads may arrive bare or wrapped under a `data` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MaybeWrapped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> MaybeWrapped<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(inner) => inner,
        }
    }
}

/// Client for the Qayd platform REST API.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
    plans_cache: Cache<Locale, Vec<Plan>>,
}

impl BackendClient {
    /// Create a new platform API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &SiteConfig) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        let plans_cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(PLANS_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: config.api_base_url.clone(),
                plans_cache,
            }),
        })
    }

    // =========================================================================
    // Order Exports (never cached - receipts must reflect current state)
    // =========================================================================

    /// Fetch a public order export by ID.
    ///
    /// Callers validate the ID shape before invoking; this method assumes a
    /// well-formed ID and issues a single uncached GET.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on 404, `Api` on other non-2xx responses, `Http`
    /// on transport failure and `Parse` on an unreadable payload.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn order_export(
        &self,
        order_id: &str,
        locale: Locale,
        store_id: Option<&str>,
    ) -> Result<OrderExportData, BackendError> {
        let url = format!("{}/public/export/orders/{order_id}", self.inner.base_url);

        let mut request = self
            .inner
            .client
            .get(&url)
            .header(ACCEPT_LANGUAGE, locale.tag());
        if let Some(store_id) = store_id {
            request = request.header(STORE_ID_HEADER, store_id);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(format!("order {order_id}")));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Order export request failed"
            );
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let wrapped: MaybeWrapped<OrderExportData> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse order export response"
            );
            BackendError::Parse(e.to_string())
        })?;

        Ok(wrapped.into_inner())
    }

    /// Fetch an order export, folding failure into [`OrderExportResult`].
    ///
    /// This is the only entry point presentation code uses: it always
    /// produces a renderable outcome and never propagates an error.
    pub async fn fetch_order_export(
        &self,
        order_id: &str,
        locale: Locale,
        store_id: Option<&str>,
    ) -> OrderExportResult {
        match self.order_export(order_id, locale, store_id).await {
            Ok(order) => OrderExportResult {
                order: Some(order),
                error: None,
                error_code: None,
            },
            Err(e) => {
                let code = ExportErrorCode::from(&e);
                tracing::warn!(order_id = %order_id, error = %e, code = code.as_str(), "Receipt fetch failed");
                OrderExportResult {
                    order: None,
                    error: Some(e.to_string()),
                    error_code: Some(code),
                }
            }
        }
    }

    // =========================================================================
    // Plans
    // =========================================================================

    /// Fetch the public subscription plans, localized and cached per-locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn plans(&self, locale: Locale) -> Result<Vec<Plan>, BackendError> {
        if let Some(plans) = self.inner.plans_cache.get(&locale).await {
            debug!("Cache hit for plans");
            return Ok(plans);
        }

        let url = format!("{}/public/plans", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(&url)
            .header(ACCEPT_LANGUAGE, locale.tag())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let wrapped: MaybeWrapped<Vec<Plan>> =
            serde_json::from_str(&body).map_err(|e| BackendError::Parse(e.to_string()))?;
        let plans = wrapped.into_inner();

        self.inner.plans_cache.insert(locale, plans.clone()).await;

        Ok(plans)
    }

    // =========================================================================
    // Contact Submissions
    // =========================================================================

    /// Submit a lead-capture form to the platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, submission), fields(email = %submission.email))]
    pub async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), BackendError> {
        let url = format!("{}/public/contact", self.inner.base_url);

        let response = self.inner.client.post(&url).json(submission).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(())
    }
}

/// Pull a human-readable message out of an error body.
///
/// Falls back to a truncated raw body when the envelope doesn't parse.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body).map_or_else(
        |_| body.chars().take(200).collect(),
        |parsed| parsed.message,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwrap_wrapped() {
        let wrapped: MaybeWrapped<Vec<Plan>> = serde_json::from_str(
            r#"{"data": [{"id": "basic", "name": "Basic", "priceMonthly": "99.00", "currencyCode": "SAR"}]}"#,
        )
        .unwrap();
        assert_eq!(wrapped.into_inner().len(), 1);
    }

    #[test]
    fn test_envelope_unwrap_bare() {
        let bare: MaybeWrapped<Vec<Plan>> = serde_json::from_str(
            r#"[{"id": "basic", "name": "Basic", "priceMonthly": "99.00", "currencyCode": "SAR"}]"#,
        )
        .unwrap();
        assert_eq!(bare.into_inner().len(), 1);
    }

    #[test]
    fn test_error_code_mapping() {
        let not_found = BackendError::NotFound("order x".to_string());
        assert_eq!(ExportErrorCode::from(&not_found), ExportErrorCode::OrderNotFound);

        let bad_store = BackendError::Api {
            status: 403,
            message: "store mismatch".to_string(),
        };
        assert_eq!(ExportErrorCode::from(&bad_store), ExportErrorCode::InvalidStore);

        let server = BackendError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(ExportErrorCode::from(&server), ExportErrorCode::FetchError);

        let parse = BackendError::Parse("unexpected eof".to_string());
        assert_eq!(ExportErrorCode::from(&parse), ExportErrorCode::Unknown);
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"message": "Order not found", "details": null}"#),
            "Order not found"
        );
        assert_eq!(extract_error_message("<html>gateway error</html>"), "<html>gateway error</html>");
    }

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ExportErrorCode::OrderNotFound.as_str(), "ORDER_NOT_FOUND");
        assert_eq!(ExportErrorCode::InvalidStore.as_str(), "INVALID_STORE");
        assert_eq!(ExportErrorCode::FetchError.as_str(), "FETCH_ERROR");
        assert_eq!(ExportErrorCode::Unknown.as_str(), "UNKNOWN_ERROR");
    }
}

//! HTTP route handlers for the web crate.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page
//! GET  /health                   - Health check
//! GET  /pricing                  - Plans from the platform API
//! GET  /docs                     - Documentation index
//! GET  /docs/{slug}              - Documentation page
//! GET  /contact                  - Lead-capture form
//! POST /contact/submit           - Lead-capture submission (rate limited)
//! GET  /export/orders/{order_id} - Public digital receipt (?storeId=...)
//! POST /prefs/locale             - Locale switcher (sets shared cookies)
//! POST /prefs/theme              - Theme toggle (sets shared cookie)
//! GET  /robots.txt               - Crawler policy
//! GET  /sitemap.xml              - Sitemap over static routes and docs
//! ```

pub mod contact;
pub mod docs;
pub mod home;
pub mod prefs;
pub mod pricing;
pub mod receipt;
pub mod seo;
pub mod shell;

use askama::Template;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use qayd_core::Locale;

use crate::error::AppError;
use crate::filters;
use crate::i18n::Prefs;
use crate::i18n::messages::{self, ErrorLabels};
use crate::middleware;
use crate::state::AppState;

use shell::Shell;

/// Site 404 page template.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
    pub labels: ErrorLabels,
}

/// Build the localized 404 response used by the router fallback and by
/// handlers that miss a lookup.
#[must_use]
pub fn not_found_page(state: &AppState, prefs: Prefs) -> Response {
    let labels = messages::errors(prefs.locale);
    let title = match prefs.locale {
        Locale::En => "Page not found - Qayd",
        Locale::Ar => "الصفحة غير موجودة - قيد",
    };
    let page = NotFoundTemplate {
        shell: Shell::new(state, prefs, title, labels.not_found_body, "/"),
        labels,
    };
    match page.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => AppError::Template(e).into_response(),
    }
}

/// Router fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>, prefs: Prefs) -> Response {
    not_found_page(&state, prefs)
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Marketing pages
        .route("/", get(home::home))
        .route("/pricing", get(pricing::show))
        // Documentation portal
        .route("/docs", get(docs::index))
        .route("/docs/{slug}", get(docs::show))
        // Lead capture
        .route("/contact", get(contact::show))
        .route(
            "/contact/submit",
            post(contact::submit).layer(middleware::contact_rate_limiter()),
        )
        // Public digital receipts
        .route("/export/orders/{order_id}", get(receipt::show))
        // Preference cookies
        .route("/prefs/locale", post(prefs::set_locale))
        .route("/prefs/theme", post(prefs::set_theme))
        // SEO
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap))
        .fallback(not_found)
}

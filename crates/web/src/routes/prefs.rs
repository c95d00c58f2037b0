//! Locale switcher and theme toggle endpoints.
//!
//! Both preferences are stored in cookies. The cross-subdomain cookies
//! (`qayd_lang`, `qayd_theme`) carry the configured `Domain` attribute so the
//! portal subdomain sees the same values; the site-level locale cookie is
//! host-only. Client-side JS mirrors the theme into localStorage, but the
//! cookie set here is the source of truth for server rendering.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use qayd_core::{Locale, Theme};
use serde::Deserialize;
use tracing::instrument;

use crate::i18n::{LANG_COOKIE, SITE_LANG_COOKIE, THEME_COOKIE};
use crate::state::AppState;

/// One year, the lifetime of preference cookies.
const PREFS_MAX_AGE_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Locale switch form data.
#[derive(Debug, Deserialize)]
pub struct LocaleForm {
    pub locale: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Theme toggle form data.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Set the language preference cookies and redirect back.
///
/// POST /prefs/locale
#[instrument(skip(state))]
pub async fn set_locale(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<LocaleForm>,
) -> Response {
    let config = state.config();
    let locale = form
        .locale
        .parse::<Locale>()
        .unwrap_or(config.default_locale);
    let next = sanitize_next(form.next.as_deref());
    let secure = config.base_url.starts_with("https://");

    let shared = build_cookie(
        LANG_COOKIE,
        locale.tag(),
        config.cookie_domain.as_deref(),
        secure,
    );
    let site = build_cookie(SITE_LANG_COOKIE, locale.tag(), None, secure);

    (
        AppendHeaders([(SET_COOKIE, shared), (SET_COOKIE, site)]),
        Redirect::to(&next),
    )
        .into_response()
}

/// Set the shared theme cookie and redirect back.
///
/// POST /prefs/theme
#[instrument(skip(state))]
pub async fn set_theme(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ThemeForm>,
) -> Response {
    let config = state.config();
    let theme = form.theme.parse::<Theme>().unwrap_or_default();
    let next = sanitize_next(form.next.as_deref());
    let secure = config.base_url.starts_with("https://");

    let cookie = build_cookie(
        THEME_COOKIE,
        theme.as_str(),
        config.cookie_domain.as_deref(),
        secure,
    );

    (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to(&next)).into_response()
}

/// Build a preference cookie string.
fn build_cookie(name: &str, value: &str, domain: Option<&str>, secure: bool) -> String {
    let mut cookie =
        format!("{name}={value}; Path=/; Max-Age={PREFS_MAX_AGE_SECONDS}; SameSite=Lax");
    if let Some(domain) = domain {
        cookie.push_str("; Domain=");
        cookie.push_str(domain);
    }
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Only allow same-site path redirects; anything else goes home.
fn sanitize_next(next: Option<&str>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cookie_host_only() {
        let cookie = build_cookie("qayd_site_lang", "ar", None, false);
        assert_eq!(
            cookie,
            "qayd_site_lang=ar; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn test_build_cookie_shared_domain_secure() {
        let cookie = build_cookie("qayd_theme", "dark", Some(".qayd.app"), true);
        assert!(cookie.contains("Domain=.qayd.app"));
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn test_sanitize_next() {
        assert_eq!(sanitize_next(Some("/pricing")), "/pricing");
        assert_eq!(sanitize_next(Some("//evil.example")), "/");
        assert_eq!(sanitize_next(Some("https://evil.example")), "/");
        assert_eq!(sanitize_next(None), "/");
    }
}

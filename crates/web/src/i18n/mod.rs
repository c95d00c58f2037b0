//! Locale and theme resolution from request cookies and headers.
//!
//! Every page resolves an active [`Locale`] before rendering. Resolution is a
//! pure read with no failure path:
//!
//! 1. the cross-subdomain language cookie (shared with the portal)
//! 2. the site-level locale cookie
//! 3. an Arabic entry in `Accept-Language`
//! 4. the configured default locale
//!
//! The [`Prefs`] extractor bundles the resolved locale with the theme cookie
//! so handlers receive both in one argument.

pub mod messages;

use axum::extract::FromRequestParts;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::http::{HeaderMap, request::Parts};
use qayd_core::{Locale, Theme};

use crate::state::AppState;

/// Cross-subdomain language preference cookie, shared with the portal.
pub const LANG_COOKIE: &str = "qayd_lang";

/// Site-level locale cookie (set by the locale switcher on this site).
pub const SITE_LANG_COOKIE: &str = "qayd_site_lang";

/// Theme preference cookie, shared with the portal.
pub const THEME_COOKIE: &str = "qayd_theme";

/// Resolve the active locale from request headers.
///
/// Always succeeds; falls back to `default` when no preference is present.
#[must_use]
pub fn resolve_locale(headers: &HeaderMap, default: Locale) -> Locale {
    if let Some(locale) = cookie_value(headers, LANG_COOKIE).and_then(|v| v.parse().ok()) {
        return locale;
    }
    if let Some(locale) = cookie_value(headers, SITE_LANG_COOKIE).and_then(|v| v.parse().ok()) {
        return locale;
    }
    if accept_language_matches(headers, Locale::Ar) {
        return Locale::Ar;
    }
    default
}

/// Resolve the theme preference, defaulting to light.
#[must_use]
pub fn resolve_theme(headers: &HeaderMap) -> Theme {
    cookie_value(headers, THEME_COOKIE)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

/// Find a cookie value by name across all `Cookie` headers.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then(|| value.trim())
        })
        .next()
}

/// Whether any `Accept-Language` entry has the given locale's primary subtag.
///
/// Matches `ar` as well as region-qualified tags like `ar-SA`. Quality
/// weights are ignored; presence is enough.
fn accept_language_matches(headers: &HeaderMap, locale: Locale) -> bool {
    let Some(header) = headers.get(ACCEPT_LANGUAGE).and_then(|h| h.to_str().ok()) else {
        return false;
    };
    header
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .map(str::trim)
        .filter_map(|tag| tag.split('-').next())
        .any(|primary| primary.eq_ignore_ascii_case(locale.tag()))
}

/// Request preferences resolved from cookies and headers.
///
/// Read once per request and threaded through page templates explicitly;
/// handlers never re-read cookies ad hoc.
#[derive(Debug, Clone, Copy)]
pub struct Prefs {
    pub locale: Locale,
    pub theme: Theme,
}

impl FromRequestParts<AppState> for Prefs {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            locale: resolve_locale(&parts.headers, state.config().default_locale),
            theme: resolve_theme(&parts.headers),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        headers
    }

    #[test]
    fn test_cross_subdomain_cookie_wins_over_accept_language() {
        let headers = headers(&[
            ("cookie", "qayd_lang=ar; other=1"),
            ("accept-language", "en-US,en;q=0.9"),
        ]);
        assert_eq!(resolve_locale(&headers, Locale::En), Locale::Ar);
    }

    #[test]
    fn test_site_cookie_used_when_shared_cookie_absent() {
        let headers = headers(&[("cookie", "qayd_site_lang=ar")]);
        assert_eq!(resolve_locale(&headers, Locale::En), Locale::Ar);
    }

    #[test]
    fn test_shared_cookie_beats_site_cookie() {
        let headers = headers(&[("cookie", "qayd_site_lang=ar; qayd_lang=en")]);
        assert_eq!(resolve_locale(&headers, Locale::Ar), Locale::En);
    }

    #[test]
    fn test_accept_language_arabic() {
        let headers = headers(&[("accept-language", "ar-SA,ar;q=0.9,en;q=0.8")]);
        assert_eq!(resolve_locale(&headers, Locale::En), Locale::Ar);
    }

    #[test]
    fn test_accept_language_english_falls_back_to_default() {
        let headers = headers(&[("accept-language", "en-US,en;q=0.9")]);
        assert_eq!(resolve_locale(&headers, Locale::En), Locale::En);
    }

    #[test]
    fn test_no_signals_uses_default() {
        assert_eq!(resolve_locale(&HeaderMap::new(), Locale::Ar), Locale::Ar);
    }

    #[test]
    fn test_invalid_cookie_value_ignored() {
        let headers = headers(&[("cookie", "qayd_lang=zz")]);
        assert_eq!(resolve_locale(&headers, Locale::En), Locale::En);
    }

    #[test]
    fn test_theme_cookie() {
        let headers = headers(&[("cookie", "qayd_theme=dark")]);
        assert_eq!(resolve_theme(&headers), Theme::Dark);
        assert_eq!(resolve_theme(&HeaderMap::new()), Theme::Light);
    }

    #[test]
    fn test_cookie_value_spacing() {
        let headers = headers(&[("cookie", "a=1;  qayd_lang=ar ;b=2")]);
        assert_eq!(cookie_value(&headers, "qayd_lang"), Some("ar"));
    }
}

//! Shared layout data for page templates.
//!
//! Every page that extends `base.html` carries a [`Shell`]: the resolved
//! locale and theme, localized chrome labels, SEO metadata and analytics
//! configuration. Building it in one place keeps handlers to a single
//! constructor call and keeps cookie reads out of templates.

use qayd_core::{Locale, Theme};

use crate::config::AnalyticsConfig;
use crate::i18n::messages::{self, FooterLabels, NavLabels};
use crate::i18n::Prefs;
use crate::seo;
use crate::state::AppState;

/// Layout data threaded through every site page.
#[derive(Debug, Clone)]
pub struct Shell {
    pub locale: Locale,
    pub lang: &'static str,
    pub dir: &'static str,
    pub theme: &'static str,
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub nav: NavLabels,
    pub footer: FooterLabels,
    pub portal_url: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub analytics: AnalyticsConfig,
    /// JSON-LD `WebSite` schema embedded in the head.
    pub json_ld: String,
    /// The locale the switcher offers (the one not currently active).
    pub other_locale_tag: &'static str,
    pub other_locale_name: &'static str,
    /// Path of the current page, used as the post-switch redirect target.
    pub current_path: String,
}

impl Shell {
    /// Build the layout data for a page.
    pub fn new(
        state: &AppState,
        prefs: Prefs,
        title: impl Into<String>,
        description: impl Into<String>,
        path: &str,
    ) -> Self {
        let config = state.config();
        let other = match prefs.locale {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        };

        Self {
            locale: prefs.locale,
            lang: prefs.locale.tag(),
            dir: prefs.locale.dir().as_str(),
            theme: theme_class(prefs.theme),
            title: title.into(),
            description: description.into(),
            canonical: format!("{}{path}", config.base_url),
            nav: messages::nav(prefs.locale),
            footer: messages::footer(prefs.locale),
            portal_url: config.portal_base_url.clone(),
            contact_email: config.contact.email.clone(),
            contact_phone: config.contact.phone.clone(),
            analytics: config.analytics.clone(),
            json_ld: seo::website_json_ld(config, prefs.locale),
            other_locale_tag: other.tag(),
            other_locale_name: other.native_name(),
            current_path: path.to_string(),
        }
    }
}

/// CSS class applied to `<body>` for the active theme.
const fn theme_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "theme-light",
        Theme::Dark => "theme-dark",
    }
}

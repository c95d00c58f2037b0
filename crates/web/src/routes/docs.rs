//! Documentation portal route handlers.
//!
//! Serves markdown-based docs loaded at startup, per locale.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use qayd_core::Locale;
use tracing::instrument;

use crate::filters;
use crate::i18n::Prefs;
use crate::i18n::messages::{self, DocsLabels};
use crate::state::AppState;

use super::shell::Shell;

/// A doc entry on the index page.
#[derive(Clone)]
pub struct DocCard {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
}

/// Docs index template.
#[derive(Template, WebTemplate)]
#[template(path = "docs/index.html")]
pub struct DocsIndexTemplate {
    pub shell: Shell,
    pub labels: DocsLabels,
    pub docs: Vec<DocCard>,
}

/// Single doc template.
#[derive(Template, WebTemplate)]
#[template(path = "docs/show.html")]
pub struct DocShowTemplate {
    pub shell: Shell,
    pub labels: DocsLabels,
    pub title: String,
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Display the documentation index.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, prefs: Prefs) -> DocsIndexTemplate {
    let docs = state
        .content()
        .docs(prefs.locale)
        .iter()
        .map(|d| DocCard {
            slug: d.slug.clone(),
            title: d.meta.title.clone(),
            description: d.meta.description.clone(),
        })
        .collect();

    let title = match prefs.locale {
        Locale::En => "Documentation - Qayd",
        Locale::Ar => "الدليل - قيد",
    };

    DocsIndexTemplate {
        shell: Shell::new(
            &state,
            prefs,
            title,
            messages::docs(prefs.locale).subtitle,
            "/docs",
        ),
        labels: messages::docs(prefs.locale),
        docs,
    }
}

/// Display a single documentation page.
#[instrument(skip(state), fields(slug = %slug))]
pub async fn show(
    State(state): State<AppState>,
    prefs: Prefs,
    Path(slug): Path<String>,
) -> Response {
    let Some(doc) = state.content().get_doc(prefs.locale, &slug) else {
        return super::not_found_page(&state, prefs);
    };

    let description = doc.meta.description.clone().unwrap_or_default();
    DocShowTemplate {
        shell: Shell::new(
            &state,
            prefs,
            format!("{} - Qayd", doc.meta.title),
            description,
            &format!("/docs/{slug}"),
        ),
        labels: messages::docs(prefs.locale),
        title: doc.meta.title.clone(),
        updated_at: doc.meta.updated_at,
        content_html: doc.content_html.clone(),
    }
    .into_response()
}

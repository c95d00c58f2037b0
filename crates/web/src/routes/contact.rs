//! Contact / lead-capture route handlers.
//!
//! The form posts to the platform's public contact endpoint. Validation
//! failures re-render the form with an inline message and the visitor's
//! input preserved; a backend failure does the same rather than surfacing an
//! error page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qayd_core::Locale;
use serde::Deserialize;
use tracing::instrument;

use crate::backend::{ContactSubmission, InquiryKind};
use crate::filters;
use crate::i18n::Prefs;
use crate::i18n::messages::{self, ContactLabels};
use crate::state::AppState;

use super::shell::Shell;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub kind: String,
    pub message: String,
}

/// Visitor input echoed back when re-rendering the form.
#[derive(Clone, Default)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub kind: String,
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub shell: Shell,
    pub labels: ContactLabels,
    pub form: ContactFormView,
    pub error: Option<&'static str>,
}

/// Contact success template.
#[derive(Template, WebTemplate)]
#[template(path = "contact_success.html")]
pub struct ContactSuccessTemplate {
    pub shell: Shell,
    pub labels: ContactLabels,
}

fn page_title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Contact - Qayd",
        Locale::Ar => "تواصل معنا - قيد",
    }
}

/// Display the contact form.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, prefs: Prefs) -> ContactTemplate {
    let labels = messages::contact(prefs.locale);
    ContactTemplate {
        shell: Shell::new(
            &state,
            prefs,
            page_title(prefs.locale),
            labels.subtitle,
            "/contact",
        ),
        labels,
        form: ContactFormView::default(),
        error: None,
    }
}

/// Submit the contact form.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    prefs: Prefs,
    Form(form): Form<ContactForm>,
) -> Response {
    let labels = messages::contact(prefs.locale);
    let email = form.email.trim().to_lowercase();

    let echo = ContactFormView {
        name: form.name.trim().to_string(),
        email: email.clone(),
        phone: form.phone.as_deref().unwrap_or("").trim().to_string(),
        company: form.company.as_deref().unwrap_or("").trim().to_string(),
        kind: form.kind.clone(),
        message: form.message.trim().to_string(),
    };

    // Basic email validation
    if !is_valid_email(&email) {
        return form_error(&state, prefs, labels, echo, labels.invalid_email);
    }

    // Validate required fields
    if echo.name.is_empty() || echo.message.is_empty() {
        return form_error(&state, prefs, labels, echo, labels.missing_fields);
    }

    let submission = ContactSubmission {
        name: echo.name.clone(),
        email,
        phone: (!echo.phone.is_empty()).then(|| echo.phone.clone()),
        company: (!echo.company.is_empty()).then(|| echo.company.clone()),
        kind: parse_kind(&echo.kind),
        message: echo.message.clone(),
        locale: prefs.locale,
    };

    match state.backend().submit_contact(&submission).await {
        Ok(()) => {
            tracing::info!("Contact submission accepted");
            ContactSuccessTemplate {
                shell: Shell::new(
                    &state,
                    prefs,
                    page_title(prefs.locale),
                    labels.success_body,
                    "/contact",
                ),
                labels,
            }
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Contact submission failed");
            form_error(&state, prefs, labels, echo, labels.submit_failed)
        }
    }
}

/// Re-render the form with an inline error message.
fn form_error(
    state: &AppState,
    prefs: Prefs,
    labels: ContactLabels,
    form: ContactFormView,
    error: &'static str,
) -> Response {
    let page = ContactTemplate {
        shell: Shell::new(
            state,
            prefs,
            page_title(prefs.locale),
            labels.subtitle,
            "/contact",
        ),
        labels,
        form,
        error: Some(error),
    };
    (StatusCode::BAD_REQUEST, page).into_response()
}

fn parse_kind(value: &str) -> InquiryKind {
    match value {
        "demo" => InquiryKind::Demo,
        "support" => InquiryKind::Support,
        _ => InquiryKind::General,
    }
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name@domain.co.uk"));
        assert!(is_valid_email("a@b.c"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@domain")); // no TLD
        assert!(!is_valid_email("test"));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("demo"), InquiryKind::Demo);
        assert_eq!(parse_kind("support"), InquiryKind::Support);
        assert_eq!(parse_kind("anything"), InquiryKind::General);
        assert_eq!(parse_kind(""), InquiryKind::General);
    }
}

//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding. Route handlers that surface failures to visitors render
//! their own localized views; `AppError` is the last-resort path that still
//! guarantees a fully-formed page rather than a blank response.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::BackendError;
use crate::content::ContentError;

/// Application-level error type for the web crate.
#[derive(Debug, Error)]
pub enum AppError {
    /// Platform API operation failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Content loading failed.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Minimal self-contained error page, independent of the site layout so it
/// can render even when layout inputs are unavailable.
#[derive(Template)]
#[template(path = "error.html")]
struct FallbackErrorTemplate {
    status: u16,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Backend(_) | Self::Content(_) | Self::Template(_) | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Backend(_) => StatusCode::BAD_GATEWAY,
            Self::Content(_) | Self::Template(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Backend(_) => "External service error",
            Self::Content(_) | Self::Template(_) | Self::Internal(_) => "Internal server error",
            Self::NotFound(_) => "Not found",
            Self::BadRequest(_) => "Bad request",
        };

        let page = FallbackErrorTemplate {
            status: status.as_u16(),
            message,
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Error template render failed: {e}");
                (status, message).into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("doc setup".to_string());
        assert_eq!(err.to_string(), "Not found: doc setup");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Backend(BackendError::Parse("eof".to_string()))),
            StatusCode::BAD_GATEWAY
        );
    }
}

//! Application state shared across handlers.

use std::path::Path;
use std::sync::Arc;

use crate::backend::{BackendClient, BackendError};
use crate::config::SiteConfig;
use crate::content::{ContentError, ContentStore};

/// Error creating application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("backend client: {0}")]
    Backend(#[from] BackendError),
    #[error("content store: {0}")]
    Content(#[from] ContentError),
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; every request is otherwise independent and
/// stateless apart from cookie-derived preferences.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    backend: BackendClient,
    content: ContentStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be built or content
    /// fails to load.
    pub fn new(config: SiteConfig, content_dir: &Path) -> Result<Self, StateError> {
        let backend = BackendClient::new(&config)?;
        let content = ContentStore::load(content_dir)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                content,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the platform API client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get a reference to the documentation content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }
}

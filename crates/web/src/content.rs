//! Documentation content loaded from markdown files.
//!
//! Docs live under `content/docs/{en,ar}/*.md`, one directory per locale.
//! Files are loaded once at startup, frontmatter is parsed as YAML, and the
//! body is rendered to HTML with GitHub Flavored Markdown extensions.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use qayd_core::Locale;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Frontmatter metadata for a documentation page.
#[derive(Debug, Clone, Deserialize)]
pub struct DocMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Position in the docs index; lower sorts first.
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A rendered documentation page.
#[derive(Debug, Clone)]
pub struct Doc {
    pub slug: String,
    pub meta: DocMeta,
    pub content_html: String,
}

/// Content store that holds all loaded docs in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    docs: Arc<HashMap<Locale, Vec<Doc>>>,
}

impl ContentStore {
    /// Load all content from the filesystem.
    ///
    /// A missing locale directory yields an empty doc list for that locale,
    /// not an error, so the site can boot before all translations exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a present directory cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let mut docs = HashMap::new();
        for locale in Locale::ALL {
            let dir = content_dir.join("docs").join(locale.tag());
            docs.insert(locale, Self::load_docs(&dir)?);
        }
        Ok(Self { docs: Arc::new(docs) })
    }

    /// Load all docs from one locale directory, sorted by `order` then title.
    fn load_docs(dir: &Path) -> Result<Vec<Doc>, ContentError> {
        let mut docs = Vec::new();

        if !dir.exists() {
            tracing::warn!("Docs directory does not exist: {:?}", dir);
            return Ok(docs);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_doc(&path) {
                    Ok(doc) => {
                        tracing::info!("Loaded doc: {}", doc.slug);
                        docs.push(doc);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load doc {:?}: {}", path, e);
                    }
                }
            }
        }

        docs.sort_by(|a, b| {
            a.meta
                .order
                .cmp(&b.meta.order)
                .then_with(|| a.meta.title.cmp(&b.meta.title))
        });

        Ok(docs)
    }

    /// Load a single doc from a markdown file.
    fn load_doc(path: &Path) -> Result<Doc, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?
            .to_string();

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<DocMeta> = matter
            .parse(&content)
            .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

        let content_html = render_markdown(&parsed.content);

        Ok(Doc {
            slug,
            meta,
            content_html,
        })
    }

    /// All docs for a locale, in index order.
    #[must_use]
    pub fn docs(&self, locale: Locale) -> &[Doc] {
        self.docs.get(&locale).map_or(&[], Vec::as_slice)
    }

    /// Get a doc by slug for a locale.
    #[must_use]
    pub fn get_doc(&self, locale: Locale, slug: &str) -> Option<&Doc> {
        self.docs(locale).iter().find(|d| d.slug == slug)
    }
}

/// Render markdown to HTML with GitHub Flavored Markdown support.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Render options
    options.render.r#unsafe = true; // Allow raw HTML in markdown

    markdown_to_html(content, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_gfm_table() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_render_markdown_heading_ids() {
        let html = render_markdown("## Getting started\n");
        assert!(html.contains("getting-started"));
    }

    #[test]
    fn test_empty_store_for_missing_dir() {
        let store = ContentStore::load(Path::new("/nonexistent/for/test")).expect("loads empty");
        assert!(store.docs(Locale::En).is_empty());
        assert!(store.get_doc(Locale::Ar, "anything").is_none());
    }
}

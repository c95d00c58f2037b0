//! Crawler endpoints: robots.txt and sitemap.xml.

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use tracing::instrument;

use crate::seo;
use crate::state::AppState;

/// GET /robots.txt
#[instrument(skip(state))]
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::robots_txt(state.config()),
    )
}

/// GET /sitemap.xml
#[instrument(skip(state))]
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/xml")],
        seo::sitemap_xml(state.config(), state.content()),
    )
}

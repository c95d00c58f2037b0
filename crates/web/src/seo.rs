//! Static SEO metadata generation.
//!
//! Produces JSON-LD structured data embedded in the base layout and the
//! crawler endpoints (`robots.txt`, `sitemap.xml`). All output is computed
//! from configuration and loaded content; nothing here touches the network.

use qayd_core::Locale;

use crate::config::SiteConfig;
use crate::content::ContentStore;

/// JSON-LD `Organization` schema for the site owner.
#[must_use]
pub fn organization_json_ld(config: &SiteConfig) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Qayd",
        "url": config.base_url,
        "email": config.contact.email,
        "logo": format!("{}/static/images/logo.svg", config.base_url),
        "sameAs": [config.portal_base_url],
    })
    .to_string()
}

/// JSON-LD `WebSite` schema, localized.
#[must_use]
pub fn website_json_ld(config: &SiteConfig, locale: Locale) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": "Qayd",
        "url": config.base_url,
        "inLanguage": locale.tag(),
    })
    .to_string()
}

/// `robots.txt` body: allow everything except receipt exports.
///
/// Receipt URLs carry order IDs and must not be indexed.
#[must_use]
pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nDisallow: /export/\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        config.base_url
    )
}

/// Static routes included in the sitemap.
const SITEMAP_ROUTES: &[&str] = &["/", "/pricing", "/docs", "/contact"];

/// `sitemap.xml` body over the static routes and loaded doc slugs.
#[must_use]
pub fn sitemap_xml(config: &SiteConfig, content: &ContentStore) -> String {
    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for route in SITEMAP_ROUTES {
        body.push_str(&format!("  <url><loc>{}{route}</loc></url>\n", config.base_url));
    }

    // Doc URLs are locale-independent; the page renders in the visitor's
    // resolved locale. Index each slug once, from the default locale's list.
    for doc in content.docs(config.default_locale) {
        body.push_str(&format!(
            "  <url><loc>{}/docs/{}</loc></url>\n",
            config.base_url, doc.slug
        ));
    }

    body.push_str("</urlset>\n");
    body
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{AnalyticsConfig, ContactConfig};

    fn config() -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "https://qayd.app".to_string(),
            api_base_url: "https://api.qayd.app/v1".to_string(),
            portal_base_url: "https://portal.qayd.app".to_string(),
            cookie_domain: None,
            default_locale: Locale::En,
            contact: ContactConfig {
                email: "hello@qayd.app".to_string(),
                phone: None,
            },
            analytics: AnalyticsConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }

    #[test]
    fn test_organization_json_ld_is_valid_json() {
        let json = organization_json_ld(&config());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["url"], "https://qayd.app");
    }

    #[test]
    fn test_robots_excludes_receipts() {
        let robots = robots_txt(&config());
        assert!(robots.contains("Disallow: /export/"));
        assert!(robots.contains("Sitemap: https://qayd.app/sitemap.xml"));
    }

    #[test]
    fn test_sitemap_contains_static_routes() {
        let content = ContentStore::load(std::path::Path::new("/nonexistent/for/test")).unwrap();
        let sitemap = sitemap_xml(&config(), &content);
        assert!(sitemap.contains("<loc>https://qayd.app/pricing</loc>"));
        assert!(sitemap.contains("<loc>https://qayd.app/docs</loc>"));
    }
}

//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `QAYD_API_BASE_URL` - Base URL of the Qayd platform REST API
//! - `SITE_BASE_URL` - Public URL for this site
//!
//! ## Optional
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `PORTAL_BASE_URL` - Customer portal URL (default: <https://portal.qayd.app>)
//! - `COOKIE_DOMAIN` - Domain attribute for the shared language/theme cookies
//!   (e.g. `.qayd.app`); omit for host-only cookies in development
//! - `DEFAULT_LOCALE` - `en` or `ar` (default: en)
//! - `CONTACT_EMAIL` - Shown in the footer (default: hello@qayd.app)
//! - `CONTACT_PHONE` - Shown in the footer
//! - `GA4_MEASUREMENT_ID` - Google Analytics 4 measurement ID
//! - `META_PIXEL_ID` - Meta (Facebook) pixel ID
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Tracing sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use qayd_core::Locale;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for this site
    pub base_url: String,
    /// Base URL of the Qayd platform REST API (no trailing slash)
    pub api_base_url: String,
    /// Customer portal URL (locale switcher and CTAs link there)
    pub portal_base_url: String,
    /// Domain attribute for cross-subdomain preference cookies
    pub cookie_domain: Option<String>,
    /// Locale used when no preference is present
    pub default_locale: Locale,
    /// Contact details shown in the footer and on the contact page
    pub contact: ContactConfig,
    /// Analytics tracking configuration
    pub analytics: AnalyticsConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry performance tracing sample rate
    pub sentry_traces_sample_rate: f32,
}

/// Public contact details.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub email: String,
    pub phone: Option<String>,
}

/// Analytics and tracking pixel configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    /// Google Analytics 4 measurement ID
    pub ga4_measurement_id: Option<String>,
    /// Meta (Facebook) pixel ID
    pub meta_pixel_id: Option<String>,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;

        let base_url = get_base_url("SITE_BASE_URL")?;
        let api_base_url = get_base_url("QAYD_API_BASE_URL")?;
        let portal_base_url =
            get_optional_env("PORTAL_BASE_URL").unwrap_or_else(|| "https://portal.qayd.app".to_string());

        let cookie_domain = get_optional_env("COOKIE_DOMAIN");

        let default_locale = get_env_or_default("DEFAULT_LOCALE", "en")
            .parse::<Locale>()
            .map_err(|e| ConfigError::InvalidEnvVar("DEFAULT_LOCALE".to_string(), e))?;

        let contact = ContactConfig {
            email: get_env_or_default("CONTACT_EMAIL", "hello@qayd.app"),
            phone: get_optional_env("CONTACT_PHONE"),
        };

        let analytics = AnalyticsConfig {
            ga4_measurement_id: get_optional_env("GA4_MEASUREMENT_ID"),
            meta_pixel_id: get_optional_env("META_PIXEL_ID"),
        };

        let sentry_sample_rate = get_rate("SENTRY_SAMPLE_RATE", 1.0)?;
        let sentry_traces_sample_rate = get_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?;

        Ok(Self {
            host,
            port,
            base_url,
            api_base_url,
            portal_base_url,
            cookie_domain,
            default_locale,
            contact,
            analytics,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required URL variable, validated and with any trailing slash removed.
fn get_base_url(key: &str) -> Result<String, ConfigError> {
    let value = get_required_env(key)?;
    Url::parse(&value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(value.trim_end_matches('/').to_string())
}

/// Get an optional sample-rate variable in `0.0..=1.0`.
fn get_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let Some(value) = get_optional_env(key) else {
        return Ok(default);
    };
    let rate = value
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "https://qayd.app".to_string(),
            api_base_url: "https://api.qayd.app/v1".to_string(),
            portal_base_url: "https://portal.qayd.app".to_string(),
            cookie_domain: Some(".qayd.app".to_string()),
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
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_rate_bounds() {
        assert!(matches!(get_rate("QAYD_TEST_RATE_UNSET", 0.25), Ok(r) if (r - 0.25).abs() < f32::EPSILON));
    }
}

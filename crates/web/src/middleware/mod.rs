//! HTTP middleware for the web crate.

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::contact_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;

//! Qayd Core - Shared types library.
//!
//! This crate provides common types used across Qayd web properties:
//! - `web` - Public marketing site, docs portal, and receipt viewer
//! - the customer portal (separate repository, shares cookie conventions)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money formatting, order status enums, locale, and theme

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

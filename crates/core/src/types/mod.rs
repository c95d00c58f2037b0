//! Core types for Qayd.
//!
//! This module provides shared domain concepts consumed by the web crates.

pub mod locale;
pub mod money;
pub mod status;
pub mod theme;

pub use locale::{Locale, TextDirection};
pub use money::format_amount;
pub use status::*;
pub use theme::Theme;

//! PharmaLingo
//!
//! Internationalization subsystem of the pharmacy web front-end: the selected
//! display language, translation lookup with placeholder substitution, and
//! change notifications for components that need to re-render.

#![allow(non_snake_case)]

pub mod config;
pub mod i18n;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{I18nError, Result};

// Re-export main components for easy access
pub use i18n::{Catalog, I18n, LanguageCode, LanguageStore, TranslationResolver};
pub use state::LanguageStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

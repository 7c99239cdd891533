//! Internationalization module
//!
//! This module handles multi-language support for the pharmacy front-end.
//! It provides the supported language set, the translation catalog, key
//! resolution with placeholder substitution, and the language store that
//! persists the selection and broadcasts changes.

pub mod catalog;
pub mod context;
pub mod events;
pub mod keys;
pub mod language;
pub mod resolver;
pub mod store;

// Re-export commonly used i18n components
pub use catalog::{Catalog, CatalogReport, TranslationStats, LanguageStats};
pub use context::I18n;
pub use events::{LanguageChanged, Listener, ListenerId, Subscription, LANGUAGE_CHANGED_EVENT};
pub use language::{LanguageCode, detect_system_locale};
pub use resolver::{MissingTranslationSink, TracingSink, TranslationParams, TranslationResolver, params};
pub use store::{LanguageStore, InitSource, DEFAULT_STORAGE_KEY};

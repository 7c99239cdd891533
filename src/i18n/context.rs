//! Application-facing i18n handle
//!
//! Bundles the language store and the resolver so components can render
//! strings in the current language without threading both around.

use std::sync::Arc;
use crate::config::I18nConfig;
use crate::state::LanguageStorage;
use super::{Catalog, LanguageChanged, LanguageCode, LanguageStore, Subscription, TranslationParams, TranslationResolver};

/// Cheap to clone; clones share the same store and catalog
#[derive(Debug, Clone)]
pub struct I18n {
    store: Arc<LanguageStore>,
    resolver: Arc<TranslationResolver>,
}

impl I18n {
    pub fn new(store: Arc<LanguageStore>, resolver: Arc<TranslationResolver>) -> Self {
        Self { store, resolver }
    }

    /// Build a store and resolver from settings and an already loaded catalog
    pub fn from_config(config: &I18nConfig, catalog: Arc<Catalog>, storage: Arc<dyn LanguageStorage>) -> Self {
        let store = LanguageStore::from_config(storage, config);
        Self::new(Arc::new(store), Arc::new(TranslationResolver::new(catalog)))
    }

    pub fn store(&self) -> &Arc<LanguageStore> {
        &self.store
    }

    pub fn resolver(&self) -> &Arc<TranslationResolver> {
        &self.resolver
    }

    pub fn language(&self) -> LanguageCode {
        self.store.get()
    }

    pub fn set_language(&self, language: LanguageCode) {
        self.store.set(language);
    }

    /// Translate `key` in the current language
    pub fn t(&self, key: &str) -> String {
        self.resolver.resolve(self.store.get(), key, None)
    }

    /// Translate `key` in the current language with placeholder values
    pub fn t_with(&self, key: &str, params: &TranslationParams) -> String {
        self.resolver.resolve(self.store.get(), key, Some(params))
    }

    /// Language selector entries: every enabled language with its native
    /// name, and whether it is the current one
    pub fn language_options(&self) -> Vec<(LanguageCode, &'static str, bool)> {
        let current = self.store.get();
        self.store
            .supported_languages()
            .iter()
            .map(|&language| (language, language.native_name(), language == current))
            .collect()
    }

    /// Register a listener on the shared store
    ///
    /// The store owns its listeners until they are unsubscribed. A listener
    /// that captures an `I18n` clone therefore keeps the store alive; capture
    /// [`resolver`](Self::resolver) or a `Weak` store handle instead and read
    /// the language from the event.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&LanguageChanged) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }
}

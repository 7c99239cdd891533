//! Current language state
//!
//! One `LanguageStore` is created by the application root and shared (for
//! example behind an `Arc`) with every component that renders text. It holds
//! the selected language, persists it on every change, and notifies
//! subscribers synchronously in subscription order.

use std::fmt;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};
use crate::config::I18nConfig;
use crate::state::LanguageStorage;
use crate::utils::logging::{log_language_change, log_storage_failure};
use super::events::{lock_registry, LanguageChanged, ListenerRegistry, SharedRegistry, Subscription};
use super::language::detect_system_locale;
use super::LanguageCode;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "language";

/// Where `initialize` took the language from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitSource {
    Stored,
    LocaleHint,
    Fallback,
}

pub struct LanguageStore {
    current: RwLock<LanguageCode>,
    fallback: LanguageCode,
    supported: Vec<LanguageCode>,
    storage_key: String,
    storage: Arc<dyn LanguageStorage>,
    listeners: SharedRegistry,
}

impl LanguageStore {
    /// Create a store holding `fallback` until initialized
    pub fn new(storage: Arc<dyn LanguageStorage>, fallback: LanguageCode) -> Self {
        Self {
            current: RwLock::new(fallback),
            fallback,
            supported: LanguageCode::ALL.to_vec(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage,
            listeners: Arc::new(Mutex::new(ListenerRegistry::default())),
        }
    }

    /// Create a store from validated i18n settings
    pub fn from_config(storage: Arc<dyn LanguageStorage>, config: &I18nConfig) -> Self {
        let fallback = LanguageCode::from_code(&config.default_language).unwrap_or_else(|| {
            warn!(
                configured = %config.default_language,
                "Unsupported default language in configuration, using en"
            );
            LanguageCode::En
        });
        let supported: Vec<LanguageCode> = config
            .supported_languages
            .iter()
            .filter_map(|code| {
                let language = LanguageCode::from_code(code);
                if language.is_none() {
                    warn!(configured = %code, "Ignoring unsupported language in configuration");
                }
                language
            })
            .collect();

        Self::new(storage, fallback)
            .with_supported_languages(supported)
            .with_storage_key(config.storage_key.clone())
    }

    /// Restrict the store to a subset of [`LanguageCode::ALL`]
    ///
    /// The subset keeps display order and always contains the fallback.
    pub fn with_supported_languages(mut self, languages: impl IntoIterator<Item = LanguageCode>) -> Self {
        let mut enabled: Vec<LanguageCode> = languages.into_iter().collect();
        if !enabled.contains(&self.fallback) {
            enabled.push(self.fallback);
        }
        self.supported = LanguageCode::ALL
            .into_iter()
            .filter(|language| enabled.contains(language))
            .collect();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Adopt the persisted language, else the locale hint, else the fallback
    ///
    /// Runs once at startup and does not notify subscribers.
    pub fn initialize(&self, locale_hint: Option<&str>) -> LanguageCode {
        let (language, source) = self.choose_initial(locale_hint);
        *self.write_current() = language;
        info!(language = %language, source = ?source, "Language initialized");
        language
    }

    /// [`initialize`](Self::initialize) with the locale from the process environment
    pub fn initialize_from_environment(&self) -> LanguageCode {
        let locale = detect_system_locale();
        self.initialize(locale.as_deref())
    }

    fn choose_initial(&self, locale_hint: Option<&str>) -> (LanguageCode, InitSource) {
        let stored = match self.storage.read(&self.storage_key) {
            Ok(stored) => stored,
            Err(e) => {
                log_storage_failure("read", &self.storage_key, &e);
                None
            }
        };

        if let Some(code) = stored.as_deref() {
            match LanguageCode::from_code(code).filter(|language| self.is_supported(*language)) {
                Some(language) => return (language, InitSource::Stored),
                None => warn!(stored = code, "Ignoring unsupported persisted language"),
            }
        }

        if let Some(language) = locale_hint
            .and_then(LanguageCode::from_locale_hint)
            .filter(|language| self.is_supported(*language))
        {
            return (language, InitSource::LocaleHint);
        }

        (self.fallback, InitSource::Fallback)
    }

    /// Currently selected language
    pub fn get(&self) -> LanguageCode {
        *self.read_current()
    }

    /// Select a language, persist it and notify every subscriber
    ///
    /// Persistence is best-effort: a storage failure is logged and the
    /// in-memory value stays authoritative. Every call notifies, including
    /// one that repeats the current language. A language outside the
    /// configured subset is declined without any effect.
    pub fn set(&self, language: LanguageCode) {
        if !self.is_supported(language) {
            warn!(language = %language, current = %self.get(), "Language not enabled, change declined");
            return;
        }

        let previous = std::mem::replace(&mut *self.write_current(), language);

        if let Err(e) = self.storage.write(&self.storage_key, language.code()) {
            log_storage_failure("write", &self.storage_key, &e);
        }

        // Listeners run without the registry lock so they may subscribe,
        // unsubscribe or read the store.
        let listeners = lock_registry(&self.listeners).snapshot();
        log_language_change(previous, language, listeners.len());

        let event = LanguageChanged { language, previous };
        for listener in listeners {
            listener(&event);
        }
    }

    /// Select a language by code; unsupported codes are declined
    ///
    /// Returns false, without touching state, storage or subscribers, when
    /// `code` is not one of the enabled languages.
    pub fn set_code(&self, code: &str) -> bool {
        match code.parse::<LanguageCode>() {
            Ok(language) if self.is_supported(language) => {
                self.set(language);
                true
            }
            Ok(language) => {
                warn!(language = %language, current = %self.get(), "Language not enabled, change declined");
                false
            }
            Err(e) => {
                warn!(error = %e, current = %self.get(), "Language change declined");
                false
            }
        }
    }

    /// Languages enabled for this store, in display order
    pub fn supported_languages(&self) -> &[LanguageCode] {
        &self.supported
    }

    pub fn is_supported(&self, language: LanguageCode) -> bool {
        self.supported.contains(&language)
    }

    /// Register a listener for every future [`set`](Self::set)
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&LanguageChanged) + Send + Sync + 'static,
    {
        let id = lock_registry(&self.listeners).register(Arc::new(listener));
        Subscription::new(id, &self.listeners)
    }

    pub fn subscriber_count(&self) -> usize {
        lock_registry(&self.listeners).len()
    }

    pub fn fallback(&self) -> LanguageCode {
        self.fallback
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn read_current(&self) -> RwLockReadGuard<'_, LanguageCode> {
        self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_current(&self) -> RwLockWriteGuard<'_, LanguageCode> {
        self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("current", &self.get())
            .field("fallback", &self.fallback)
            .field("supported", &self.supported)
            .field("storage_key", &self.storage_key)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

//! Translation resolution
//!
//! Resolves dotted lookup keys against the catalog and substitutes
//! `{{name}}` placeholders. Resolution never fails outright: a key that does
//! not lead to a string is reported to a [`MissingTranslationSink`] and the key
//! itself is returned as the display text.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use regex::{Captures, Regex};
use tracing::warn;
use crate::utils::errors::{I18nError, Result};
use super::{Catalog, LanguageCode};

/// Named values substituted into `{{name}}` placeholders
pub type TranslationParams = HashMap<String, String>;

/// Build [`TranslationParams`] from any displayable values
pub fn params<K, V, I>(entries: I) -> TranslationParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Display,
{
    entries
        .into_iter()
        .map(|(name, value)| (name.into(), value.to_string()))
        .collect()
}

/// Receives one diagnostic per failed resolution
pub trait MissingTranslationSink: Send + Sync {
    fn missing_translation(&self, language: LanguageCode, key: &str);
}

/// Default sink: a warning through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MissingTranslationSink for TracingSink {
    fn missing_translation(&self, language: LanguageCode, key: &str) {
        let error = I18nError::MissingTranslation {
            key: key.to_string(),
            language: language.code().to_string(),
        };
        warn!(key = key, language = %language, severity = %error.severity(), "{}", error);
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is valid"))
}

/// Resolves lookup keys against a shared catalog
pub struct TranslationResolver {
    catalog: Arc<Catalog>,
    sink: Arc<dyn MissingTranslationSink>,
    misses: AtomicUsize,
}

impl TranslationResolver {
    /// Create a resolver that logs missing keys through `tracing`
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            sink: Arc::new(TracingSink),
            misses: AtomicUsize::new(0),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_sink(mut self, sink: Arc<dyn MissingTranslationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Resolve `key` in `lang`, substituting `params` when given
    ///
    /// On failure the sink is notified once and `key` is returned unchanged.
    pub fn resolve(&self, lang: LanguageCode, key: &str, params: Option<&TranslationParams>) -> String {
        match self.try_resolve(lang, key, params) {
            Ok(text) => text,
            Err(_) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                self.sink.missing_translation(lang, key);
                key.to_string()
            }
        }
    }

    /// Shorthand for [`resolve`](Self::resolve) without parameters
    pub fn t(&self, lang: LanguageCode, key: &str) -> String {
        self.resolve(lang, key, None)
    }

    /// Resolve without the fallback, reporting nothing
    pub fn try_resolve(
        &self,
        lang: LanguageCode,
        key: &str,
        params: Option<&TranslationParams>,
    ) -> Result<String> {
        let template = self
            .catalog
            .lookup_str(lang, key)
            .ok_or_else(|| I18nError::MissingTranslation {
                key: key.to_string(),
                language: lang.code().to_string(),
            })?;

        Ok(match params {
            Some(params) => substitute(template, params),
            None => template.to_string(),
        })
    }

    /// Number of failed resolutions since the resolver was created
    pub fn missing_count(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for TranslationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationResolver")
            .field("languages", &LanguageCode::ALL.iter().filter(|l| self.catalog.has_language(**l)).count())
            .field("misses", &self.missing_count())
            .finish()
    }
}

/// Single left-to-right pass; unknown names keep their token and substituted
/// text is never scanned again.
fn substitute(template: &str, params: &TranslationParams) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

//! Translation catalog
//!
//! A catalog maps each supported language to a nested JSON object tree whose
//! leaves are translation strings. It is assembled once at startup, either
//! from the translations embedded in the binary or from a directory of
//! `<code>.json` files, and is read-only afterwards.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{info, warn, error};
use crate::utils::errors::{I18nError, Result};
use crate::utils::logging::log_catalog_loaded;
use super::LanguageCode;

const BUILTIN_UZ: &str = include_str!("../../translations/uz.json");
const BUILTIN_RU: &str = include_str!("../../translations/ru.json");
const BUILTIN_EN: &str = include_str!("../../translations/en.json");

/// Immutable translation trees keyed by language
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    translations: HashMap<LanguageCode, Map<String, Value>>,
}

impl Catalog {
    /// Create a catalog without any language sub-trees
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog embedded in the binary from `translations/*.json`
    pub fn builtin() -> Result<Self> {
        Self::new()
            .with_json(LanguageCode::Uz, BUILTIN_UZ)?
            .with_json(LanguageCode::Ru, BUILTIN_RU)?
            .with_json(LanguageCode::En, BUILTIN_EN)
    }

    /// Add (or replace) a language sub-tree parsed from JSON text
    pub fn with_json(self, lang: LanguageCode, json: &str) -> Result<Self> {
        let tree: Value = serde_json::from_str(json)?;
        self.with_tree(lang, tree)
    }

    /// Add (or replace) a language sub-tree; the root must be a JSON object
    pub fn with_tree(mut self, lang: LanguageCode, tree: Value) -> Result<Self> {
        self.insert_tree(lang, tree)?;
        Ok(self)
    }

    fn insert_tree(&mut self, lang: LanguageCode, tree: Value) -> Result<()> {
        match tree {
            Value::Object(map) => {
                log_catalog_loaded(lang, count_keys(&map));
                self.translations.insert(lang, map);
                Ok(())
            }
            other => Err(I18nError::Catalog(format!(
                "Invalid translation tree for {}: expected an object, found {}",
                lang,
                value_kind(&other)
            ))),
        }
    }

    /// Load `<code>.json` for every supported language from a directory
    ///
    /// A missing or malformed file for `fallback` is fatal. Other languages are
    /// logged and left without a sub-tree, so lookups in them fail gracefully.
    pub async fn load_dir(dir: impl AsRef<Path>, fallback: LanguageCode) -> Result<Self> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();

        for lang in LanguageCode::ALL {
            let file_path = dir.join(format!("{}.json", lang.code()));

            let loaded = match fs::try_exists(&file_path).await {
                Ok(false) => {
                    warn!("Translation file not found: {}", file_path.display());
                    if lang == fallback {
                        return Err(I18nError::Catalog(format!(
                            "Fallback language translation file not found: {}",
                            file_path.display()
                        )));
                    }
                    continue;
                }
                Ok(true) => match fs::read_to_string(&file_path).await {
                    Ok(content) => serde_json::from_str::<Value>(&content)
                        .map_err(I18nError::from)
                        .and_then(|tree| catalog.insert_tree(lang, tree)),
                    Err(e) => Err(e.into()),
                },
                Err(e) => Err(e.into()),
            };

            match loaded {
                Ok(()) => info!("Loaded translations for language: {}", lang),
                Err(e) => {
                    error!("Failed to load translations for {}: {}", lang, e);
                    if lang == fallback {
                        return Err(I18nError::Catalog(format!(
                            "Failed to load fallback language translations: {}",
                            e
                        )));
                    }
                }
            }
        }

        Ok(catalog)
    }

    /// Whether a sub-tree exists for the language
    pub fn has_language(&self, lang: LanguageCode) -> bool {
        self.translations.contains_key(&lang)
    }

    /// Descend the language's tree one `.`-separated segment at a time
    ///
    /// Returns `None` if the language has no sub-tree, a segment is missing, or
    /// an intermediate node is not an object.
    pub fn lookup(&self, lang: LanguageCode, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.translations.get(&lang)?.get(first)?;

        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }

        Some(current)
    }

    /// Lookup that only succeeds when the final node is a string
    pub fn lookup_str(&self, lang: LanguageCode, key: &str) -> Option<&str> {
        self.lookup(lang, key)?.as_str()
    }

    /// Every key path that resolves to a string in the language
    pub fn key_paths(&self, lang: LanguageCode) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        if let Some(tree) = self.translations.get(&lang) {
            collect_leaves(tree, "", &mut |path, value| {
                if value.is_string() {
                    paths.insert(path);
                }
            });
        }
        paths
    }

    /// Compare languages against each other and report gaps
    pub fn validate(&self) -> CatalogReport {
        let mut report = CatalogReport::default();

        let union: BTreeSet<String> = LanguageCode::ALL
            .iter()
            .flat_map(|lang| self.key_paths(*lang))
            .collect();

        for lang in LanguageCode::ALL {
            let Some(tree) = self.translations.get(&lang) else {
                report.absent_languages.push(lang);
                continue;
            };

            let own = self.key_paths(lang);
            let missing: Vec<String> = union.difference(&own).cloned().collect();
            if !missing.is_empty() {
                report.missing.insert(lang, missing);
            }

            let mut non_string = Vec::new();
            collect_leaves(tree, "", &mut |path, value| {
                if !value.is_string() {
                    non_string.push(path);
                }
            });
            if !non_string.is_empty() {
                report.non_string.insert(lang, non_string);
            }
        }

        report
    }

    /// Require every key to resolve to a string in every supported language
    pub fn ensure_keys(&self, keys: &[&str]) -> Result<()> {
        let gaps: Vec<String> = LanguageCode::ALL
            .iter()
            .flat_map(|lang| {
                keys.iter()
                    .filter(move |key| self.lookup_str(*lang, key).is_none())
                    .map(move |key| format!("{}:{}", lang, key))
            })
            .collect();

        if gaps.is_empty() {
            Ok(())
        } else {
            Err(I18nError::Catalog(format!(
                "{} missing translations: {}",
                gaps.len(),
                gaps.join(", ")
            )))
        }
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let mut languages: Vec<LanguageStats> = self
            .translations
            .iter()
            .map(|(lang, tree)| LanguageStats {
                code: *lang,
                key_count: count_keys(tree),
            })
            .collect();
        languages.sort_by_key(|stats| stats.code);

        let total_keys = LanguageCode::ALL
            .iter()
            .flat_map(|lang| self.key_paths(*lang))
            .collect::<BTreeSet<_>>()
            .len();

        TranslationStats { languages, total_keys }
    }
}

/// Result of comparing catalog languages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// Keys present in some language but not resolvable to a string in this one
    pub missing: BTreeMap<LanguageCode, Vec<String>>,
    /// Leaves holding numbers, booleans, arrays or null
    pub non_string: BTreeMap<LanguageCode, Vec<String>>,
    /// Supported languages without a sub-tree
    pub absent_languages: Vec<LanguageCode>,
}

impl CatalogReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.non_string.is_empty() && self.absent_languages.is_empty()
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    /// Distinct string keys across all languages
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: LanguageCode,
    pub key_count: usize,
}

/// Visit every non-object node with its dotted path
fn collect_leaves(obj: &Map<String, Value>, prefix: &str, visit: &mut dyn FnMut(String, &Value)) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(nested) => collect_leaves(nested, &path, visit),
            leaf => visit(path, leaf),
        }
    }
}

/// Recursively count translation keys
fn count_keys(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

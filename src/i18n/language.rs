//! Supported language codes and locale detection
//!
//! The front-end ships three locales. Anything read from storage or from the
//! ambient locale is funnelled through this closed set before it reaches the
//! rest of the subsystem.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::errors::I18nError;

/// A supported display locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Uz,
    Ru,
    En,
}

/// Locale prefixes mapped to supported codes, checked in order
const LOCALE_PREFIXES: [(&str, LanguageCode); 3] = [
    ("uz", LanguageCode::Uz),
    ("ru", LanguageCode::Ru),
    ("en", LanguageCode::En),
];

/// Environment variables consulted for the ambient locale, highest priority first
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

impl LanguageCode {
    /// Every supported language, in language selector order
    pub const ALL: [LanguageCode; 3] = [LanguageCode::Uz, LanguageCode::Ru, LanguageCode::En];

    /// Short code as persisted and used for catalog file names
    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::Uz => "uz",
            LanguageCode::Ru => "ru",
            LanguageCode::En => "en",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(self) -> &'static str {
        match self {
            LanguageCode::Uz => "O'zbekcha",
            LanguageCode::Ru => "Русский",
            LanguageCode::En => "English",
        }
    }

    /// Parse an exact language code (case-insensitive, surrounding whitespace ignored)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Map an ambient locale string such as `ru-RU` or `uz_UZ.UTF-8` to a supported code
    pub fn from_locale_hint(locale: &str) -> Option<Self> {
        let locale = locale.trim().to_ascii_lowercase();
        LOCALE_PREFIXES
            .iter()
            .find(|(prefix, _)| locale.starts_with(prefix))
            .map(|(_, lang)| *lang)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnsupportedLanguage(s.to_string()))
    }
}

/// Read the ambient locale hint from the process environment
///
/// Returns the first non-empty value of `LC_ALL`, `LC_MESSAGES`, `LANG`,
/// skipping the `C` and `POSIX` pseudo-locales.
pub fn detect_system_locale() -> Option<String> {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

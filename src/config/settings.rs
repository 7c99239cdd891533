//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Prefix for environment variable overrides, e.g. `PHARMALINGO_I18N__DEFAULT_LANGUAGE`
pub const ENV_PREFIX: &str = "PHARMALINGO";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Language adopted when neither storage nor the locale hint yields one
    pub default_language: String,
    pub supported_languages: Vec<String>,
    /// Storage key holding the persisted language preference
    pub storage_key: String,
    /// Directory with `<code>.json` catalogs; the embedded catalog is used when unset
    pub translations_dir: Option<String>,
}

/// Backend used for the persisted language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

/// Preference storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// JSON file path for the `file` backend
    pub path: Option<String>,
    /// Connection URL for the `redis` backend
    pub redis_url: Option<String>,
    /// Key prefix for the `redis` backend
    pub prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub file_prefix: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load settings from the named file (extension optional) layered over defaults
    pub fn load_from(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::I18nError> {
        super::validation::validate_settings(self)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            supported_languages: vec!["uz".to_string(), "ru".to_string(), "en".to_string()],
            storage_key: "language".to_string(),
            translations_dir: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            storage: StorageConfig {
                backend: StorageBackend::File,
                path: Some("pharmalingo-storage.json".to_string()),
                redis_url: None,
                prefix: "pharmalingo:".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs".to_string(),
                file_prefix: "pharmalingo.log".to_string(),
            },
        }
    }
}

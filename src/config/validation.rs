//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::LanguageCode;
use crate::utils::errors::{I18nError, Result};
use super::{Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(I18nError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(I18nError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    for code in &config.supported_languages {
        if LanguageCode::from_code(code).is_none() {
            return Err(I18nError::Config(
                format!("Unsupported language in supported languages list: {}", code)
            ));
        }
    }

    if LanguageCode::from_code(&config.default_language).is_none() {
        return Err(I18nError::Config(
            format!("Unsupported default language: {}", config.default_language)
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(I18nError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    if config.storage_key.is_empty() {
        return Err(I18nError::Config(
            "Storage key is required".to_string()
        ));
    }

    Ok(())
}

/// Validate preference storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    match config.backend {
        StorageBackend::Memory => {}
        StorageBackend::File => {
            if config.path.as_deref().map_or(true, str::is_empty) {
                return Err(I18nError::Config(
                    "Storage path is required for the file backend".to_string()
                ));
            }
        }
        StorageBackend::Redis => {
            if config.redis_url.as_deref().map_or(true, str::is_empty) {
                return Err(I18nError::Config(
                    "Redis URL is required for the redis backend".to_string()
                ));
            }
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(I18nError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(I18nError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

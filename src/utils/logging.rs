//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the PharmaLingo application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::i18n::LanguageCode;
use crate::utils::errors::{I18nError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender when dropped, so the caller
/// must keep it alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| I18nError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a language change broadcast
pub fn log_language_change(previous: LanguageCode, language: LanguageCode, subscribers: usize) {
    info!(
        previous = %previous,
        language = %language,
        subscribers = subscribers,
        "Language changed"
    );
}

/// Log a best-effort storage failure
pub fn log_storage_failure(operation: &str, key: &str, error: &I18nError) {
    warn!(
        operation = operation,
        key = key,
        error = %error,
        severity = %error.severity(),
        "Language preference storage failed, keeping in-memory value"
    );
}

/// Log catalog statistics after loading
pub fn log_catalog_loaded(language: LanguageCode, key_count: usize) {
    debug!(language = %language, key_count = key_count, "Catalog language loaded");
}

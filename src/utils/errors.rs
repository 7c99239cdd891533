//! Error handling for PharmaLingo
//!
//! This module defines the error types used by the i18n subsystem and the
//! severity model used when those errors are logged.

use thiserror::Error;

/// Main error type for PharmaLingo
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Missing translation for key '{key}' in language '{language}'")]
    MissingTranslation { key: String, language: String },

    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("Storage persistence failure: {0}")]
    StoragePersistence(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for PharmaLingo operations
pub type Result<T> = std::result::Result<T, I18nError>;

impl I18nError {
    /// Check if the error is recoverable without restarting the application
    pub fn is_recoverable(&self) -> bool {
        match self {
            I18nError::MissingTranslation { .. } => true,
            I18nError::UnsupportedLanguage(_) => true,
            I18nError::StoragePersistence(_) => true,
            I18nError::Catalog(_) => false,
            I18nError::Config(_) => false,
            I18nError::Redis(_) => true,
            I18nError::Serialization(_) => false,
            I18nError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            I18nError::MissingTranslation { .. } => ErrorSeverity::Warning,
            I18nError::UnsupportedLanguage(_) => ErrorSeverity::Info,
            I18nError::StoragePersistence(_) => ErrorSeverity::Warning,
            I18nError::Catalog(_) => ErrorSeverity::Critical,
            I18nError::Config(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsystem_errors_are_recoverable() {
        let missing = I18nError::MissingTranslation {
            key: "footer.unknown".to_string(),
            language: "uz".to_string(),
        };
        assert!(missing.is_recoverable());
        assert_eq!(missing.severity(), ErrorSeverity::Warning);

        let unsupported = I18nError::UnsupportedLanguage("fr".to_string());
        assert!(unsupported.is_recoverable());
        assert_eq!(unsupported.severity(), ErrorSeverity::Info);

        let storage = I18nError::StoragePersistence("quota exceeded".to_string());
        assert!(storage.is_recoverable());
    }

    #[test]
    fn test_startup_errors_are_critical() {
        let err = I18nError::Catalog("en.json is not an object".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().to_string(), "CRITICAL");
    }

    #[test]
    fn test_error_messages() {
        let err = I18nError::MissingTranslation {
            key: "orders.title".to_string(),
            language: "ru".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing translation for key 'orders.title' in language 'ru'"
        );
    }
}

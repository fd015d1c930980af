//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application.
//! Navigation itself never fails; errors come from configuration, the
//! terminal and logger setup.

pub use crate::config::ConfigError;

/// Main application error type.
///
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Clipboard access errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let app_error: AppError = ConfigError::FilePathNotSet.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_error_messages() {
        let error = AppError::Terminal("raw mode unavailable".to_string());
        assert_eq!(error.to_string(), "Terminal error: raw mode unavailable");

        let error = AppError::Logger("already set".to_string());
        assert_eq!(error.to_string(), "Logger error: already set");

        let error = AppError::Clipboard("no display".to_string());
        assert_eq!(error.to_string(), "Clipboard error: no display");
    }
}

//! Application error types
//!
//! Unified error handling for the bot process. The variants follow the
//! failure taxonomy: configuration and schema failures abort startup, while
//! database and platform failures inside an event handler are logged and the
//! handler returns.

use profile_core::DomainError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Domain / persistence errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Chat platform errors (invalid token, unknown channel, send failures)
    #[error("Discord error: {0}")]
    Discord(String),

    // Liveness server errors
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Check if this failure must abort the process
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Config(_) | Self::Server(_) => true,
            Self::Domain(e) => e.is_fatal(),
            Self::Discord(_) => false,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
            Self::Discord(_) => "DISCORD_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }

    /// Create a platform error from anything displayable
    pub fn discord(err: impl std::fmt::Display) -> Self {
        Self::Discord(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_config_errors_are_fatal() {
        let err = AppError::from(ConfigError::MissingVar("DISCORD_TOKEN"));
        assert!(err.is_fatal());
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variable: DISCORD_TOKEN"
        );
    }

    #[test]
    fn test_migration_errors_are_fatal() {
        let err = AppError::from(DomainError::MigrationFailed {
            version: 5,
            reason: "permission denied".to_string(),
        });
        assert!(err.is_fatal());
        assert_eq!(err.error_code(), "MIGRATION_FAILED");
    }

    #[test]
    fn test_handler_errors_are_not_fatal() {
        assert!(!AppError::from(DomainError::Timeout(Duration::from_secs(30))).is_fatal());
        assert!(!AppError::discord("Unknown Channel").is_fatal());
    }

    #[test]
    fn test_domain_errors_are_transparent() {
        let err = AppError::from(DomainError::ReportNotFound(3));
        assert_eq!(err.to_string(), "Report not found: 3");
    }
}

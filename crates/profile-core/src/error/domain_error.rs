//! Domain errors - error types for the domain layer

use std::time::Duration;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Report not found: {0}")]
    ReportNotFound(i32),

    #[error("Setting not found: {0}")]
    SettingNotFound(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database configuration error: {0}")]
    ConfigurationError(String),

    #[error("Database operation timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Schema migration {version} failed: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get a stable error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",
            Self::SettingNotFound(_) => "UNKNOWN_SETTING",
            Self::ConfigurationError(_) => "DATABASE_CONFIG_ERROR",
            Self::Timeout(_) => "DATABASE_TIMEOUT",
            Self::MigrationFailed { .. } => "MIGRATION_FAILED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReportNotFound(_) | Self::SettingNotFound(_))
    }

    /// Check if the failure is transient: the triggering operation is
    /// abandoned and the next event may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::DatabaseError(_))
    }

    /// Check if the failure must abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(_) | Self::MigrationFailed { .. }
        )
    }
}

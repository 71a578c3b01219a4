//! Error handling utilities for repositories

use profile_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::PoolTimedOut => DomainError::DatabaseError(
            "timed out waiting for a pooled connection".to_string(),
        ),
        SqlxError::Configuration(err) => DomainError::ConfigurationError(err.to_string()),
        e => DomainError::DatabaseError(e.to_string()),
    }
}

/// Create a "report not found" error
pub fn report_not_found(report_id: i32) -> DomainError {
    DomainError::ReportNotFound(report_id)
}

/// Create a "setting not found" error
pub fn setting_not_found(key: &str) -> DomainError {
    DomainError::SettingNotFound(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_db_error() {
        assert!(matches!(
            map_db_error(SqlxError::RowNotFound),
            DomainError::DatabaseError(_)
        ));
        assert!(map_db_error(SqlxError::PoolTimedOut).is_transient());
    }
}

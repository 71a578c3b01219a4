//! Setting database model

use sqlx::FromRow;

/// Database model for settings table
#[derive(Debug, Clone, FromRow)]
pub struct SettingModel {
    pub key: String,
    pub value: Option<String>,
}

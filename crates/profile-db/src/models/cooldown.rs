//! Report cooldown database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for report_cooldowns table
#[derive(Debug, Clone, FromRow)]
pub struct CooldownModel {
    pub user_id: i64,
    pub last_report_at: DateTime<Utc>,
}

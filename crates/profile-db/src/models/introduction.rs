//! Introduction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for introductions table
#[derive(Debug, Clone, FromRow)]
pub struct IntroductionModel {
    pub user_id: i64,
    pub channel_id: i64,
    pub message_id: i64,
    pub created_at: Option<DateTime<Utc>>,
}

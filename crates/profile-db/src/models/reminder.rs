//! Reminder database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reminders table
#[derive(Debug, Clone, FromRow)]
pub struct ReminderModel {
    pub id: i32,
    pub channel_id: i64,
    pub remind_at: DateTime<Utc>,
    pub status: String,
}

//! Guild settings database model

use sqlx::FromRow;

/// Database model for guild_settings table
#[derive(Debug, Clone, FromRow)]
pub struct GuildSettingsModel {
    pub guild_id: i64,
    pub report_channel_id: Option<i64>,
    pub urgent_role_id: Option<i64>,
}

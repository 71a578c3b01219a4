//! Guild settings entity - where moderation reports are routed

use crate::value_objects::Snowflake;

/// Per-guild moderation routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildSettings {
    pub guild_id: Snowflake,
    pub report_channel_id: Option<Snowflake>,
    pub urgent_role_id: Option<Snowflake>,
}

impl GuildSettings {
    /// Check if reports have somewhere to go
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.report_channel_id.is_some()
    }
}

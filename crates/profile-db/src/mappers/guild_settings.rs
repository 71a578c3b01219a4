//! GuildSettings entity <-> model mapper

use profile_core::entities::GuildSettings;
use profile_core::value_objects::Snowflake;

use crate::models::GuildSettingsModel;

impl From<GuildSettingsModel> for GuildSettings {
    fn from(model: GuildSettingsModel) -> Self {
        GuildSettings {
            guild_id: Snowflake::new(model.guild_id),
            report_channel_id: model.report_channel_id.map(Snowflake::new),
            urgent_role_id: model.urgent_role_id.map(Snowflake::new),
        }
    }
}

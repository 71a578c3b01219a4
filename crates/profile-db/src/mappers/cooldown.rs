//! ReportCooldown entity <-> model mapper

use profile_core::entities::ReportCooldown;
use profile_core::value_objects::Snowflake;

use crate::models::CooldownModel;

impl From<CooldownModel> for ReportCooldown {
    fn from(model: CooldownModel) -> Self {
        ReportCooldown {
            user_id: Snowflake::new(model.user_id),
            last_report_at: model.last_report_at,
        }
    }
}

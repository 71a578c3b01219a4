//! Reminder entity <-> model mapper

use profile_core::entities::{Reminder, ReminderStatus};
use profile_core::value_objects::Snowflake;

use crate::models::ReminderModel;

/// Convert ReminderModel to Reminder entity
impl From<ReminderModel> for Reminder {
    fn from(model: ReminderModel) -> Self {
        Reminder {
            id: model.id,
            channel_id: Snowflake::new(model.channel_id),
            remind_at: model.remind_at,
            status: ReminderStatus::from(model.status),
        }
    }
}

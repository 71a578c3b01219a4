//! Domain entities - the rows the bot persists

mod bump;
mod cooldown;
mod guild_settings;
mod introduction;
mod reminder;
mod report;
mod setting;

pub use bump::BumpCount;
pub use cooldown::ReportCooldown;
pub use guild_settings::GuildSettings;
pub use introduction::Introduction;
pub use reminder::{Reminder, ReminderStatus};
pub use report::{
    NewReport, Report, ReportFilter, ReportStats, ReportSummary, DEFAULT_REPORT_STATUS,
};
pub use setting::{Setting, SCAN_COMPLETED_KEY};

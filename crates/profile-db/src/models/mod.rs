//! Database models - SQLx-compatible structs for PostgreSQL tables

mod bump;
mod cooldown;
mod guild_settings;
mod introduction;
mod reminder;
mod report;
mod setting;

pub use bump::BumpModel;
pub use cooldown::CooldownModel;
pub use guild_settings::GuildSettingsModel;
pub use introduction::IntroductionModel;
pub use reminder::ReminderModel;
pub use report::{ReportModel, ReportStatusCountModel, ReportSummaryModel};
pub use setting::SettingModel;

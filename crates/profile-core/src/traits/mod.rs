//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BumpRepository, CooldownRepository, GuildSettingsRepository, IntroductionRepository,
    ReminderRepository, ReportRepository, RepoResult, SettingsRepository,
};

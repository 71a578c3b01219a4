//! # profile-core
//!
//! Domain layer containing entities, value objects, and repository traits for
//! the introduction bot. This crate has zero dependencies on infrastructure
//! (database driver, chat gateway, web framework).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BumpCount, GuildSettings, Introduction, NewReport, Reminder, ReminderStatus, Report,
    ReportCooldown, ReportFilter, ReportStats, ReportSummary, Setting, DEFAULT_REPORT_STATUS,
    SCAN_COMPLETED_KEY,
};
pub use error::DomainError;
pub use traits::{
    BumpRepository, CooldownRepository, GuildSettingsRepository, IntroductionRepository,
    ReminderRepository, ReportRepository, RepoResult, SettingsRepository,
};
pub use value_objects::{Snowflake, SnowflakeParseError};

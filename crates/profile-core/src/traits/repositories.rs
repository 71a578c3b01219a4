//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every call round-trips to storage; no
//! implementation keeps an authoritative in-memory copy.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    BumpCount, GuildSettings, Introduction, NewReport, Reminder, ReminderStatus, Report,
    ReportFilter, ReportStats, ReportSummary, Setting,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Bump Repository
// ============================================================================

#[async_trait]
pub trait BumpRepository: Send + Sync {
    /// Atomically add one bump for the user and return the new total
    async fn record_bump(&self, user_id: Snowflake) -> RepoResult<i32>;

    /// Bump total for a user (0 if never bumped)
    async fn user_count(&self, user_id: Snowflake) -> RepoResult<i32>;

    /// Users with the most bumps, highest first
    async fn top_users(&self, limit: i64) -> RepoResult<Vec<BumpCount>>;

    /// Sum of all bumps (0 if nobody bumped yet)
    async fn total_bumps(&self) -> RepoResult<i64>;
}

// ============================================================================
// Reminder Repository
// ============================================================================

#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Replace any existing reminder with a new one (single slot)
    async fn set_reminder(&self, channel_id: Snowflake, remind_at: DateTime<Utc>) -> RepoResult<()>;

    /// Earliest-scheduled reminder regardless of status
    async fn get_reminder(&self) -> RepoResult<Option<Reminder>>;

    /// Change the status of the reminder(s) targeting a channel
    async fn update_status(&self, channel_id: Snowflake, status: &ReminderStatus) -> RepoResult<()>;

    /// Delete every reminder
    async fn clear_reminder(&self) -> RepoResult<()>;
}

// ============================================================================
// Settings Repository
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Find a setting by key
    async fn get(&self, key: &str) -> RepoResult<Option<Setting>>;

    /// Insert or overwrite a setting
    async fn set(&self, key: &str, value: &str) -> RepoResult<()>;

    /// Whether the introduction channel has been scanned before
    async fn is_scan_completed(&self) -> RepoResult<bool>;

    /// Record that the introduction channel scan finished
    async fn mark_scan_completed(&self) -> RepoResult<()>;
}

// ============================================================================
// Introduction Repository
// ============================================================================

#[async_trait]
pub trait IntroductionRepository: Send + Sync {
    /// Insert or replace the user's introduction. Returns `true` when the
    /// user had no introduction before.
    async fn save(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<bool>;

    /// Find a user's introduction
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Introduction>>;

    /// Number of stored introductions
    async fn count(&self) -> RepoResult<i64>;

    /// Most recently posted introductions, newest first
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<Introduction>>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// File a report and return its assigned id
    async fn create(&self, report: &NewReport) -> RepoResult<i32>;

    /// Remember the id of the message that announced the report
    async fn set_message_id(&self, report_id: i32, message_id: Snowflake) -> RepoResult<()>;

    /// Overwrite the status (any label, no enforced ordering)
    async fn update_status(&self, report_id: i32, status: &str) -> RepoResult<()>;

    /// Find a report by id
    async fn find(&self, report_id: i32) -> RepoResult<Option<Report>>;

    /// Latest reports, newest first, at most [`ReportFilter::LIST_LIMIT`]
    async fn list(&self, filter: &ReportFilter) -> RepoResult<Vec<ReportSummary>>;

    /// Number of reports per status
    async fn stats(&self) -> RepoResult<ReportStats>;
}

// ============================================================================
// Guild Settings Repository
// ============================================================================

#[async_trait]
pub trait GuildSettingsRepository: Send + Sync {
    /// Insert or replace a guild's moderation routing
    async fn upsert(
        &self,
        guild_id: Snowflake,
        report_channel_id: Option<Snowflake>,
        urgent_role_id: Option<Snowflake>,
    ) -> RepoResult<()>;

    /// Find a guild's moderation routing
    async fn find(&self, guild_id: Snowflake) -> RepoResult<Option<GuildSettings>>;
}

// ============================================================================
// Cooldown Repository
// ============================================================================

#[async_trait]
pub trait CooldownRepository: Send + Sync {
    /// Gate a report submission.
    ///
    /// Returns `Duration::ZERO` and records now as the last report time when
    /// the user may proceed; otherwise returns the remaining wait and leaves
    /// the stored time untouched. Concurrent checks for one user are
    /// serialized, so at most one of them passes.
    async fn check_cooldown(&self, user_id: Snowflake, window: Duration) -> RepoResult<Duration>;
}

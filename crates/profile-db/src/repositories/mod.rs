//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! profile-core. Every method resolves the shared pool through the
//! [`PoolManager`](crate::pool::PoolManager) and runs under its command
//! timeout; pooled connections and open transactions are released when
//! dropped, on success and error paths alike.

mod bump;
mod cooldown;
mod error;
mod guild_settings;
mod introduction;
mod reminder;
mod report;
mod settings;

pub(crate) use error::map_db_error;

pub use bump::PgBumpRepository;
pub use cooldown::PgCooldownRepository;
pub use guild_settings::PgGuildSettingsRepository;
pub use introduction::PgIntroductionRepository;
pub use reminder::PgReminderRepository;
pub use report::PgReportRepository;
pub use settings::PgSettingsRepository;

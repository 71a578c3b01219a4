//! # profile-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Lazily created, process-scoped connection pool ([`PoolManager`])
//! - Versioned, idempotent schema migrations per feature area
//! - Database models with SQLx `FromRow` derives and model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use profile_db::{migrations, DatabaseConfig, PgIntroductionRepository, PoolManager};
//! use profile_core::traits::IntroductionRepository;
//!
//! async fn example(url: String) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url,
//!         max_connections: 5,
//!         command_timeout: Duration::from_secs(10),
//!         ..Default::default()
//!     };
//!     let db = Arc::new(PoolManager::new(config));
//!     migrations::init_all(&db).await?;
//!
//!     let intros = PgIntroductionRepository::new(db.clone());
//!     let count = intros.count().await?;
//!
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrations::Feature;
pub use pool::{DatabaseConfig, PgPool, PoolManager};
pub use repositories::{
    PgBumpRepository, PgCooldownRepository, PgGuildSettingsRepository, PgIntroductionRepository,
    PgReminderRepository, PgReportRepository, PgSettingsRepository,
};

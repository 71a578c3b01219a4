//! Schema initialization and self-healing migrations
//!
//! Each feature area owns a slice of the versioned step list in [`MIGRATIONS`].
//! Initializers run their steps in version order on a single connection at
//! every startup; steps are idempotent, so brand-new databases and tables
//! created by older releases converge on the same layout. Any failure is
//! returned as [`DomainError::MigrationFailed`] and is fatal to startup.

mod steps;

use std::fmt;

use sqlx::PgConnection;
use tracing::{debug, info, instrument};

use profile_core::{DomainError, RepoResult};

use crate::pool::PoolManager;

pub use steps::MIGRATIONS;

/// Feature area owning a group of tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// `users`, `reminders`, `settings`
    Bump,
    /// `introductions`
    Introductions,
    /// `reports`, `guild_settings`, `report_cooldowns`
    Moderation,
}

impl Feature {
    /// Every feature area, in initialization order
    pub const ALL: [Feature; 3] = [Feature::Bump, Feature::Introductions, Feature::Moderation];

    /// Steps belonging to this feature, in version order
    pub fn migrations(self) -> impl Iterator<Item = &'static Migration> {
        MIGRATIONS.iter().filter(move |m| m.feature == self)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bump => "bump",
            Self::Introductions => "introductions",
            Self::Moderation => "moderation",
        })
    }
}

/// What a migration does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Idempotent statement (`IF NOT EXISTS`, `ON CONFLICT DO NOTHING`)
    Sql(&'static str),
    /// Add a column unless the catalog already lists it
    AddColumnIfMissing {
        table: &'static str,
        column: &'static str,
        definition: &'static str,
    },
}

/// One versioned schema step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub version: u32,
    pub feature: Feature,
    pub description: &'static str,
    pub step: Step,
}

/// Ensure the tables of one feature area exist and are up to date
#[instrument(skip(db))]
pub async fn init_feature(db: &PoolManager, feature: Feature) -> RepoResult<()> {
    let pool = db.acquire().await?;
    let mut conn = db.timed(pool.acquire()).await?;

    for migration in feature.migrations() {
        debug!(
            version = migration.version,
            description = migration.description,
            "Applying schema step"
        );

        db.timed(apply(&mut conn, migration))
            .await
            .map_err(|e| DomainError::MigrationFailed {
                version: migration.version,
                reason: e.to_string(),
            })?;
    }

    info!(%feature, "Schema initialized");
    Ok(())
}

/// Initialize every feature area
pub async fn init_all(db: &PoolManager) -> RepoResult<()> {
    for feature in Feature::ALL {
        init_feature(db, feature).await?;
    }
    Ok(())
}

async fn apply(conn: &mut PgConnection, migration: &Migration) -> Result<(), sqlx::Error> {
    match migration.step {
        Step::Sql(sql) => {
            sqlx::raw_sql(sql).execute(&mut *conn).await?;
        }
        Step::AddColumnIfMissing {
            table,
            column,
            definition,
        } => {
            if column_exists(conn, table, column).await? {
                return Ok(());
            }

            info!(table, column, "Column missing, adding it");
            let alter = format!("ALTER TABLE {table} ADD COLUMN {column} {definition}");
            sqlx::raw_sql(&alter).execute(&mut *conn).await?;
            info!(table, column, "Column added");
        }
    }
    Ok(())
}

/// Look the column up in the catalog of the connection's current schema
async fn column_exists(
    conn: &mut PgConnection,
    table: &str,
    column: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r"
        SELECT EXISTS (
            SELECT 1
            FROM information_schema.columns
            WHERE table_schema = current_schema()
              AND table_name = $1
              AND column_name = $2
        )
        ",
    )
    .bind(table)
    .bind(column)
    .fetch_one(&mut *conn)
    .await
}

//! PostgreSQL implementation of CooldownRepository

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use profile_core::entities::ReportCooldown;
use profile_core::traits::{CooldownRepository, RepoResult};
use profile_core::value_objects::Snowflake;

use crate::models::CooldownModel;
use crate::pool::PoolManager;

/// PostgreSQL implementation of CooldownRepository
#[derive(Clone)]
pub struct PgCooldownRepository {
    db: Arc<PoolManager>,
}

impl PgCooldownRepository {
    /// Create a new PgCooldownRepository
    pub fn new(db: Arc<PoolManager>) -> Self {
        Self { db }
    }
}

/// Read-check-write under a transaction-scoped advisory lock keyed on the
/// user id. The lock is released on commit or rollback.
async fn check_and_stamp(
    pool: &PgPool,
    user_id: i64,
    window: Duration,
) -> Result<Duration, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    let last = sqlx::query_as::<_, CooldownModel>(
        "SELECT user_id, last_report_at FROM report_cooldowns WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await?;

    let now = Utc::now();
    if let Some(remaining) = last
        .map(ReportCooldown::from)
        .and_then(|cooldown| cooldown.remaining(now, window))
    {
        tx.rollback().await?;
        return Ok(remaining);
    }

    sqlx::query(
        r#"
        INSERT INTO report_cooldowns (user_id, last_report_at) VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET last_report_at = EXCLUDED.last_report_at
        "#,
    )
    .bind(user_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Duration::ZERO)
}

#[async_trait]
impl CooldownRepository for PgCooldownRepository {
    #[instrument(skip(self))]
    async fn check_cooldown(&self, user_id: Snowflake, window: Duration) -> RepoResult<Duration> {
        let pool = self.db.acquire().await?;
        let remaining = self
            .db
            .timed(check_and_stamp(&pool, user_id.into_inner(), window))
            .await?;

        debug!(remaining_secs = remaining.as_secs(), "Checked report cooldown");
        Ok(remaining)
    }
}

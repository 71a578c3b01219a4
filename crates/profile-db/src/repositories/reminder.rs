//! PostgreSQL implementation of ReminderRepository
//!
//! The table holds at most one reminder: setting a new one replaces
//! whatever was there.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use profile_core::entities::{Reminder, ReminderStatus};
use profile_core::traits::{ReminderRepository, RepoResult};
use profile_core::value_objects::Snowflake;

use crate::models::ReminderModel;
use crate::pool::PoolManager;

/// PostgreSQL implementation of ReminderRepository
#[derive(Clone)]
pub struct PgReminderRepository {
    db: Arc<PoolManager>,
}

impl PgReminderRepository {
    /// Create a new PgReminderRepository
    pub fn new(db: Arc<PoolManager>) -> Self {
        Self { db }
    }
}

/// Delete-then-insert in one transaction.
///
/// The table lock makes concurrent callers queue up, so the slot never ends
/// up holding two rows.
async fn replace_reminder(
    pool: &PgPool,
    channel_id: i64,
    remind_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("LOCK TABLE reminders IN EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM reminders")
        .execute(&mut *tx)
        .await?;

    sqlx::query("INSERT INTO reminders (channel_id, remind_at) VALUES ($1, $2)")
        .bind(channel_id)
        .bind(remind_at)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}

#[async_trait]
impl ReminderRepository for PgReminderRepository {
    #[instrument(skip(self))]
    async fn set_reminder(&self, channel_id: Snowflake, remind_at: DateTime<Utc>) -> RepoResult<()> {
        let pool = self.db.acquire().await?;
        self.db
            .timed(replace_reminder(&pool, channel_id.into_inner(), remind_at))
            .await
    }

    #[instrument(skip(self))]
    async fn get_reminder(&self) -> RepoResult<Option<Reminder>> {
        let pool = self.db.acquire().await?;
        let result = self
            .db
            .timed(
                sqlx::query_as::<_, ReminderModel>(
                    r#"
                    SELECT id, channel_id, remind_at, status
                    FROM reminders
                    ORDER BY remind_at
                    LIMIT 1
                    "#,
                )
                .fetch_optional(&pool),
            )
            .await?;

        Ok(result.map(Reminder::from))
    }

    #[instrument(skip(self))]
    async fn update_status(&self, channel_id: Snowflake, status: &ReminderStatus) -> RepoResult<()> {
        let pool = self.db.acquire().await?;
        self.db
            .timed(
                sqlx::query("UPDATE reminders SET status = $1 WHERE channel_id = $2")
                    .bind(status.as_str())
                    .bind(channel_id.into_inner())
                    .execute(&pool),
            )
            .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_reminder(&self) -> RepoResult<()> {
        let pool = self.db.acquire().await?;
        self.db
            .timed(sqlx::query("DELETE FROM reminders").execute(&pool))
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReminderRepository>();
    }
}

//! PostgreSQL implementation of SettingsRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use profile_core::entities::{Setting, SCAN_COMPLETED_KEY};
use profile_core::traits::{RepoResult, SettingsRepository};

use crate::models::SettingModel;
use crate::pool::PoolManager;

use super::error::setting_not_found;

/// PostgreSQL implementation of SettingsRepository
#[derive(Clone)]
pub struct PgSettingsRepository {
    db: Arc<PoolManager>,
}

impl PgSettingsRepository {
    /// Create a new PgSettingsRepository
    pub fn new(db: Arc<PoolManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> RepoResult<Option<Setting>> {
        let pool = self.db.acquire().await?;
        let result = self
            .db
            .timed(
                sqlx::query_as::<_, SettingModel>("SELECT key, value FROM settings WHERE key = $1")
                    .bind(key)
                    .fetch_optional(&pool),
            )
            .await?;

        Ok(result.map(Setting::from))
    }

    #[instrument(skip(self))]
    async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        let pool = self.db.acquire().await?;
        self.db
            .timed(
                sqlx::query(
                    r#"
                    INSERT INTO settings (key, value) VALUES ($1, $2)
                    ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
                    "#,
                )
                .bind(key)
                .bind(value)
                .execute(&pool),
            )
            .await?;

        Ok(())
    }

    async fn is_scan_completed(&self) -> RepoResult<bool> {
        Ok(self
            .get(SCAN_COMPLETED_KEY)
            .await?
            .is_some_and(|setting| setting.is_true()))
    }

    /// Flip the seeded flag. The row is created by the schema initializer, so
    /// a missing row means initialization never ran.
    #[instrument(skip(self))]
    async fn mark_scan_completed(&self) -> RepoResult<()> {
        let pool = self.db.acquire().await?;
        let result = self
            .db
            .timed(
                sqlx::query("UPDATE settings SET value = 'true' WHERE key = $1")
                    .bind(SCAN_COMPLETED_KEY)
                    .execute(&pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(setting_not_found(SCAN_COMPLETED_KEY));
        }

        Ok(())
    }
}

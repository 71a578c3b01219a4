//! PostgreSQL implementation of GuildSettingsRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use profile_core::entities::GuildSettings;
use profile_core::traits::{GuildSettingsRepository, RepoResult};
use profile_core::value_objects::Snowflake;

use crate::models::GuildSettingsModel;
use crate::pool::PoolManager;

/// PostgreSQL implementation of GuildSettingsRepository
#[derive(Clone)]
pub struct PgGuildSettingsRepository {
    db: Arc<PoolManager>,
}

impl PgGuildSettingsRepository {
    /// Create a new PgGuildSettingsRepository
    pub fn new(db: Arc<PoolManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GuildSettingsRepository for PgGuildSettingsRepository {
    #[instrument(skip(self))]
    async fn upsert(
        &self,
        guild_id: Snowflake,
        report_channel_id: Option<Snowflake>,
        urgent_role_id: Option<Snowflake>,
    ) -> RepoResult<()> {
        let pool = self.db.acquire().await?;
        self.db
            .timed(
                sqlx::query(
                    r#"
                    INSERT INTO guild_settings (guild_id, report_channel_id, urgent_role_id)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (guild_id) DO UPDATE SET
                        report_channel_id = EXCLUDED.report_channel_id,
                        urgent_role_id = EXCLUDED.urgent_role_id
                    "#,
                )
                .bind(guild_id.into_inner())
                .bind(report_channel_id.map(Snowflake::into_inner))
                .bind(urgent_role_id.map(Snowflake::into_inner))
                .execute(&pool),
            )
            .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, guild_id: Snowflake) -> RepoResult<Option<GuildSettings>> {
        let pool = self.db.acquire().await?;
        let result = self
            .db
            .timed(
                sqlx::query_as::<_, GuildSettingsModel>(
                    r#"
                    SELECT guild_id, report_channel_id, urgent_role_id
                    FROM guild_settings
                    WHERE guild_id = $1
                    "#,
                )
                .bind(guild_id.into_inner())
                .fetch_optional(&pool),
            )
            .await?;

        Ok(result.map(GuildSettings::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgGuildSettingsRepository>();
    }
}

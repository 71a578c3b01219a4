//! PostgreSQL implementation of IntroductionRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use profile_core::entities::Introduction;
use profile_core::traits::{IntroductionRepository, RepoResult};
use profile_core::value_objects::Snowflake;

use crate::models::IntroductionModel;
use crate::pool::PoolManager;

/// PostgreSQL implementation of IntroductionRepository
#[derive(Clone)]
pub struct PgIntroductionRepository {
    db: Arc<PoolManager>,
}

impl PgIntroductionRepository {
    /// Create a new PgIntroductionRepository
    pub fn new(db: Arc<PoolManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IntroductionRepository for PgIntroductionRepository {
    #[instrument(skip(self))]
    async fn save(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<bool> {
        let pool = self.db.acquire().await?;

        // xmax is 0 only on a freshly inserted tuple
        let inserted = self
            .db
            .timed(
                sqlx::query_scalar::<_, bool>(
                    r#"
                    INSERT INTO introductions (user_id, channel_id, message_id, created_at)
                    VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
                    ON CONFLICT (user_id) DO UPDATE SET
                        channel_id = EXCLUDED.channel_id,
                        message_id = EXCLUDED.message_id,
                        created_at = CURRENT_TIMESTAMP
                    RETURNING (xmax = 0)
                    "#,
                )
                .bind(user_id.into_inner())
                .bind(channel_id.into_inner())
                .bind(message_id.into_inner())
                .fetch_one(&pool),
            )
            .await?;

        debug!(inserted, "Saved introduction");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Introduction>> {
        let pool = self.db.acquire().await?;
        let result = self
            .db
            .timed(
                sqlx::query_as::<_, IntroductionModel>(
                    r#"
                    SELECT user_id, channel_id, message_id, created_at
                    FROM introductions
                    WHERE user_id = $1
                    "#,
                )
                .bind(user_id.into_inner())
                .fetch_optional(&pool),
            )
            .await?;

        debug!(found = result.is_some(), "Looked up introduction");
        Ok(result.map(Introduction::from))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let pool = self.db.acquire().await?;
        self.db
            .timed(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM introductions").fetch_one(&pool))
            .await
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<Introduction>> {
        let pool = self.db.acquire().await?;
        let rows = self
            .db
            .timed(
                sqlx::query_as::<_, IntroductionModel>(
                    r#"
                    SELECT user_id, channel_id, message_id, created_at
                    FROM introductions
                    ORDER BY created_at DESC NULLS LAST
                    LIMIT $1
                    "#,
                )
                .bind(limit.max(0))
                .fetch_all(&pool),
            )
            .await?;

        Ok(rows.into_iter().map(Introduction::from).collect())
    }
}

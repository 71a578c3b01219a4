//! PostgreSQL implementation of BumpRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use profile_core::entities::BumpCount;
use profile_core::traits::{BumpRepository, RepoResult};
use profile_core::value_objects::Snowflake;

use crate::models::BumpModel;
use crate::pool::PoolManager;

/// PostgreSQL implementation of BumpRepository
#[derive(Clone)]
pub struct PgBumpRepository {
    db: Arc<PoolManager>,
}

impl PgBumpRepository {
    /// Create a new PgBumpRepository
    pub fn new(db: Arc<PoolManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BumpRepository for PgBumpRepository {
    #[instrument(skip(self))]
    async fn record_bump(&self, user_id: Snowflake) -> RepoResult<i32> {
        let pool = self.db.acquire().await?;
        self.db
            .timed(
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO users (user_id, bump_count) VALUES ($1, 1)
                    ON CONFLICT (user_id)
                    DO UPDATE SET bump_count = users.bump_count + 1
                    RETURNING bump_count
                    "#,
                )
                .bind(user_id.into_inner())
                .fetch_one(&pool),
            )
            .await
    }

    #[instrument(skip(self))]
    async fn user_count(&self, user_id: Snowflake) -> RepoResult<i32> {
        let pool = self.db.acquire().await?;
        let count = self
            .db
            .timed(
                sqlx::query_scalar::<_, i32>("SELECT bump_count FROM users WHERE user_id = $1")
                    .bind(user_id.into_inner())
                    .fetch_optional(&pool),
            )
            .await?;

        Ok(count.unwrap_or(0))
    }

    #[instrument(skip(self))]
    async fn top_users(&self, limit: i64) -> RepoResult<Vec<BumpCount>> {
        let pool = self.db.acquire().await?;
        let rows = self
            .db
            .timed(
                sqlx::query_as::<_, BumpModel>(
                    r#"
                    SELECT user_id, bump_count
                    FROM users
                    ORDER BY bump_count DESC
                    LIMIT $1
                    "#,
                )
                .bind(limit.max(0))
                .fetch_all(&pool),
            )
            .await?;

        Ok(rows.into_iter().map(BumpCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn total_bumps(&self) -> RepoResult<i64> {
        let pool = self.db.acquire().await?;
        let total = self
            .db
            .timed(
                sqlx::query_scalar::<_, Option<i64>>("SELECT SUM(bump_count) FROM users")
                    .fetch_one(&pool),
            )
            .await?;

        Ok(total.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBumpRepository>();
    }
}

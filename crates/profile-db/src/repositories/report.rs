//! PostgreSQL implementation of ReportRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use profile_core::entities::{NewReport, Report, ReportFilter, ReportStats, ReportSummary};
use profile_core::traits::{ReportRepository, RepoResult};
use profile_core::value_objects::Snowflake;

use crate::mappers::stats_from_counts;
use crate::models::{ReportModel, ReportStatusCountModel, ReportSummaryModel};
use crate::pool::PoolManager;

use super::error::report_not_found;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    db: Arc<PoolManager>,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(db: Arc<PoolManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self, report), fields(guild_id = %report.guild_id, target = %report.target_user_id))]
    async fn create(&self, report: &NewReport) -> RepoResult<i32> {
        let pool = self.db.acquire().await?;
        self.db
            .timed(
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO reports (guild_id, target_user_id, violated_rule, details, message_link, urgency)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING report_id
                    "#,
                )
                .bind(report.guild_id.into_inner())
                .bind(report.target_user_id.into_inner())
                .bind(&report.violated_rule)
                .bind(report.details.as_deref())
                .bind(report.message_link.as_deref())
                .bind(&report.urgency)
                .fetch_one(&pool),
            )
            .await
    }

    #[instrument(skip(self))]
    async fn set_message_id(&self, report_id: i32, message_id: Snowflake) -> RepoResult<()> {
        let pool = self.db.acquire().await?;
        let result = self
            .db
            .timed(
                sqlx::query("UPDATE reports SET message_id = $1 WHERE report_id = $2")
                    .bind(message_id.into_inner())
                    .bind(report_id)
                    .execute(&pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(report_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, report_id: i32, status: &str) -> RepoResult<()> {
        let pool = self.db.acquire().await?;
        let result = self
            .db
            .timed(
                sqlx::query("UPDATE reports SET status = $1 WHERE report_id = $2")
                    .bind(status)
                    .bind(report_id)
                    .execute(&pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(report_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, report_id: i32) -> RepoResult<Option<Report>> {
        let pool = self.db.acquire().await?;
        let result = self
            .db
            .timed(
                sqlx::query_as::<_, ReportModel>(
                    r#"
                    SELECT report_id, guild_id, message_id, target_user_id, violated_rule,
                           details, message_link, urgency, status, created_at
                    FROM reports
                    WHERE report_id = $1
                    "#,
                )
                .bind(report_id)
                .fetch_optional(&pool),
            )
            .await?;

        Ok(result.map(Report::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ReportFilter) -> RepoResult<Vec<ReportSummary>> {
        let pool = self.db.acquire().await?;

        // A NULL status parameter disables the filter
        let rows = self
            .db
            .timed(
                sqlx::query_as::<_, ReportSummaryModel>(
                    r#"
                    SELECT report_id, target_user_id, status
                    FROM reports
                    WHERE $1::TEXT IS NULL OR status = $1
                    ORDER BY report_id DESC
                    LIMIT $2
                    "#,
                )
                .bind(filter.status())
                .bind(ReportFilter::LIST_LIMIT)
                .fetch_all(&pool),
            )
            .await?;

        Ok(rows.into_iter().map(ReportSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<ReportStats> {
        let pool = self.db.acquire().await?;
        let rows = self
            .db
            .timed(
                sqlx::query_as::<_, ReportStatusCountModel>(
                    r#"
                    SELECT status, COUNT(*) AS count
                    FROM reports
                    GROUP BY status
                    "#,
                )
                .fetch_all(&pool),
            )
            .await?;

        Ok(stats_from_counts(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReportRepository>();
    }
}

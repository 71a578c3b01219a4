//! Report database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub report_id: i32,
    pub guild_id: Option<i64>,
    pub message_id: Option<i64>,
    pub target_user_id: Option<i64>,
    pub violated_rule: Option<String>,
    pub details: Option<String>,
    pub message_link: Option<String>,
    pub urgency: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Listing projection of a report
#[derive(Debug, Clone, FromRow)]
pub struct ReportSummaryModel {
    pub report_id: i32,
    pub target_user_id: Option<i64>,
    pub status: Option<String>,
}

/// Status count (for stats aggregation)
#[derive(Debug, Clone, FromRow)]
pub struct ReportStatusCountModel {
    pub status: Option<String>,
    pub count: i64,
}

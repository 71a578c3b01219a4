//! Report entity - a rule-violation report filed by a member

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::value_objects::Snowflake;

/// Status the database assigns to new reports ("unhandled").
///
/// Existing deployments store this exact label, so it must not change.
pub const DEFAULT_REPORT_STATUS: &str = "未対応";

/// Count of reports per status label; statuses without rows are absent
pub type ReportStats = HashMap<String, i64>;

/// A stored report.
///
/// The table predates most constraints, so anything the bot does not set on
/// creation is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub report_id: i32,
    pub guild_id: Option<Snowflake>,
    pub message_id: Option<Snowflake>,
    pub target_user_id: Option<Snowflake>,
    pub violated_rule: Option<String>,
    pub details: Option<String>,
    pub message_link: Option<String>,
    pub urgency: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Report {
    /// Check if a moderator has not touched the report yet
    pub fn is_unhandled(&self) -> bool {
        self.status.as_deref() == Some(DEFAULT_REPORT_STATUS)
    }
}

/// Fields supplied when a report is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub guild_id: Snowflake,
    pub target_user_id: Snowflake,
    pub violated_rule: String,
    pub details: Option<String>,
    pub message_link: Option<String>,
    pub urgency: String,
}

/// Row of a report listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub report_id: i32,
    pub target_user_id: Option<Snowflake>,
    pub status: Option<String>,
}

/// Status filter for report listings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportFilter {
    #[default]
    All,
    Status(String),
}

impl ReportFilter {
    /// Maximum rows a listing returns
    pub const LIST_LIMIT: i64 = 20;

    /// Build a filter from a moderator-supplied label; `all` and empty mean no filter
    pub fn parse(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("" | "all") => Self::All,
            Some(status) => Self::Status(status.to_string()),
        }
    }

    /// Status to match, if any
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Status(s) => Some(s),
        }
    }
}

//! Report entity <-> model mappers

use profile_core::entities::{Report, ReportStats, ReportSummary};
use profile_core::value_objects::Snowflake;

use crate::models::{ReportModel, ReportStatusCountModel, ReportSummaryModel};

/// Convert ReportModel to Report entity
impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            report_id: model.report_id,
            guild_id: model.guild_id.map(Snowflake::new),
            message_id: model.message_id.map(Snowflake::new),
            target_user_id: model.target_user_id.map(Snowflake::new),
            violated_rule: model.violated_rule,
            details: model.details,
            message_link: model.message_link,
            urgency: model.urgency,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

impl From<ReportSummaryModel> for ReportSummary {
    fn from(model: ReportSummaryModel) -> Self {
        ReportSummary {
            report_id: model.report_id,
            target_user_id: model.target_user_id.map(Snowflake::new),
            status: model.status,
        }
    }
}

/// Fold grouped status counts into a map. Rows whose status is NULL have no
/// label to key on and are dropped.
pub fn stats_from_counts(rows: Vec<ReportStatusCountModel>) -> ReportStats {
    rows.into_iter()
        .filter_map(|row| row.status.map(|status| (status, row.count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_drop_null_status() {
        let stats = stats_from_counts(vec![
            ReportStatusCountModel {
                status: Some("未対応".to_string()),
                count: 3,
            },
            ReportStatusCountModel {
                status: None,
                count: 2,
            },
            ReportStatusCountModel {
                status: Some("対応済み".to_string()),
                count: 1,
            },
        ]);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get("未対応"), Some(&3));
        assert_eq!(stats.get("対応済み"), Some(&1));
    }

    #[test]
    fn test_summary_keeps_missing_target() {
        let summary = ReportSummary::from(ReportSummaryModel {
            report_id: 4,
            target_user_id: None,
            status: Some("未対応".to_string()),
        });
        assert_eq!(summary.report_id, 4);
        assert!(summary.target_user_id.is_none());
    }
}

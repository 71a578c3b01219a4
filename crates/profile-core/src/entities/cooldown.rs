//! Report cooldown entity - rate limit on report submission per user

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::value_objects::Snowflake;

/// Last time a user filed a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportCooldown {
    pub user_id: Snowflake,
    pub last_report_at: DateTime<Utc>,
}

impl ReportCooldown {
    /// Time left before the user may report again, or `None` if the window
    /// has passed.
    ///
    /// A `last_report_at` in the future (clock skew) counts as zero elapsed.
    pub fn remaining(&self, now: DateTime<Utc>, window: Duration) -> Option<Duration> {
        let elapsed = (now - self.last_report_at).to_std().unwrap_or(Duration::ZERO);
        (elapsed < window).then(|| window - elapsed)
    }
}

//! Reminder entity - the single pending bump reminder

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::Snowflake;

/// Lifecycle label of a reminder.
///
/// Stored as free text; values this bot does not write itself are kept
/// verbatim in [`ReminderStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReminderStatus {
    #[default]
    Waiting,
    Sent,
    Other(String),
}

impl ReminderStatus {
    /// Database representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Waiting => "waiting",
            Self::Sent => "sent",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ReminderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "waiting" => Self::Waiting,
            "sent" => Self::Sent,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for ReminderStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduled reminder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: i32,
    pub channel_id: Snowflake,
    pub remind_at: DateTime<Utc>,
    pub status: ReminderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_keeps_unknown_values() {
        assert_eq!(ReminderStatus::from("waiting"), ReminderStatus::Waiting);
        assert_eq!(ReminderStatus::from("sent"), ReminderStatus::Sent);

        let custom = ReminderStatus::from("snoozed");
        assert_eq!(custom, ReminderStatus::Other("snoozed".to_string()));
        assert_eq!(custom.as_str(), "snoozed");
    }

    #[test]
    fn test_default_status_is_waiting() {
        assert_eq!(ReminderStatus::default().to_string(), "waiting");
    }
}

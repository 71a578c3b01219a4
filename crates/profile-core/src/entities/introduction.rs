//! Introduction entity - a user's latest self-introduction post

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Latest introduction post of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introduction {
    pub user_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    /// `None` only for rows that predate the column and were never reposted
    pub created_at: Option<DateTime<Utc>>,
}

impl Introduction {
    /// Create a new Introduction stamped with the current time
    pub fn new(user_id: Snowflake, channel_id: Snowflake, message_id: Snowflake) -> Self {
        Self {
            user_id,
            channel_id,
            message_id,
            created_at: Some(Utc::now()),
        }
    }

    /// Jump link to the introduction message.
    ///
    /// `guild_id` is `None` for direct-message channels, which the platform
    /// addresses as `@me`.
    pub fn message_link(&self, guild_id: Option<Snowflake>) -> String {
        let guild = guild_id.map_or_else(|| "@me".to_string(), |id| id.to_string());
        format!(
            "https://discord.com/channels/{guild}/{}/{}",
            self.channel_id, self.message_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro() -> Introduction {
        Introduction::new(
            Snowflake::new(100),
            Snowflake::new(1_300_659_373_227_638_794),
            Snowflake::new(555),
        )
    }

    #[test]
    fn test_message_link_in_guild() {
        assert_eq!(
            intro().message_link(Some(Snowflake::new(9))),
            "https://discord.com/channels/9/1300659373227638794/555"
        );
    }

    #[test]
    fn test_message_link_without_guild() {
        assert_eq!(
            intro().message_link(None),
            "https://discord.com/channels/@me/1300659373227638794/555"
        );
    }

    #[test]
    fn test_new_is_timestamped() {
        assert!(intro().created_at.is_some());
    }
}

//! New posts in the introduction channel

use serenity::all::Message;
use tracing::{error, info};

use profile_common::AppResult;
use profile_core::value_objects::Snowflake;

use crate::state::BotState;

/// The parts of a chat message that matter for introductions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroPost {
    pub author_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub from_bot: bool,
}

impl IntroPost {
    /// Check if this post counts as its author's introduction
    pub fn is_introduction(&self, introduction_channel: Snowflake) -> bool {
        !self.from_bot && self.channel_id == introduction_channel
    }

    /// Upsert the post as its author's introduction. Returns `true` when the
    /// author had none stored before.
    pub async fn store(&self, state: &BotState) -> AppResult<bool> {
        Ok(state
            .introductions()
            .save(self.author_id, self.channel_id, self.message_id)
            .await?)
    }
}

impl From<&Message> for IntroPost {
    fn from(message: &Message) -> Self {
        Self {
            author_id: Snowflake::from(message.author.id.get()),
            channel_id: Snowflake::from(message.channel_id.get()),
            message_id: Snowflake::from(message.id.get()),
            from_bot: message.author.bot,
        }
    }
}

pub(crate) async fn on_message(message: &Message, state: &BotState) {
    let post = IntroPost::from(message);
    if !post.is_introduction(state.channels().introduction_channel_id) {
        return;
    }

    match post.store(state).await {
        Ok(first) => info!(
            user_id = %post.author_id,
            author = %message.author.name,
            first,
            "Saved new introduction"
        ),
        Err(e) => error!(
            error = %e,
            code = e.error_code(),
            user_id = %post.author_id,
            message_id = %post.message_id,
            "Failed to save introduction"
        ),
    }
}

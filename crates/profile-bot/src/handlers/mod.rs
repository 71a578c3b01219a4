//! Gateway event handlers
//!
//! Each event is handled in its own task by the gateway client. Failures
//! are logged with structured fields and the handler returns; nothing is
//! retried.

mod message;
mod ready;
mod voice;

pub use message::IntroPost;
pub use ready::{newest_per_author, BackfillSummary};
pub use voice::{build_notice, joined_channel};

use async_trait::async_trait;
use serenity::all::{ChannelId, Context, EventHandler, GatewayIntents, Message, Ready, VoiceState};

use profile_core::value_objects::Snowflake;

use crate::state::BotState;

/// Gateway intents the handlers depend on
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
}

/// Routes gateway events to the handler functions
#[derive(Debug, Clone)]
pub struct Handler {
    state: BotState,
}

impl Handler {
    /// Create a new Handler
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::on_ready(&ctx, &ready, &self.state).await;
    }

    async fn message(&self, _ctx: Context, new_message: Message) {
        message::on_message(&new_message, &self.state).await;
    }

    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::on_voice_state_update(&ctx, old.as_ref(), &new, &self.state).await;
    }
}

/// Gateway channel id for a stored id; zero is not a valid channel
pub(crate) fn to_channel_id(id: Snowflake) -> Option<ChannelId> {
    (!id.is_zero()).then(|| ChannelId::new(id.as_u64()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intents_include_privileged_reads() {
        let intents = intents();
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(GatewayIntents::GUILD_VOICE_STATES));
        assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
    }

    #[test]
    fn test_zero_channel_is_rejected() {
        assert!(to_channel_id(Snowflake::new(0)).is_none());
        assert_eq!(
            to_channel_id(Snowflake::new(42)).map(ChannelId::get),
            Some(42)
        );
    }
}

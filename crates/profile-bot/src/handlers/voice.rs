//! Voice-join announcements

use serenity::all::{Channel, Context, VoiceState};
use tracing::{error, info};

use profile_common::{AppError, AppResult, ChannelConfig};
use profile_core::entities::Introduction;
use profile_core::value_objects::Snowflake;

use super::to_channel_id;
use crate::notice::JoinNotice;
use crate::state::BotState;

/// Monitored channel the member just entered, if any.
///
/// Leaving, staying put (mute, deafen) and moving into an unmonitored
/// channel all yield `None`.
pub fn joined_channel(
    old: Option<Snowflake>,
    new: Option<Snowflake>,
    channels: &ChannelConfig,
) -> Option<Snowflake> {
    let new = new?;
    (old != Some(new) && channels.is_monitored(new)).then_some(new)
}

/// Compose the notice for a member, linking their introduction when stored
pub fn build_notice(
    display_name: String,
    channel_name: String,
    introduction: Option<&Introduction>,
    guild_id: Option<Snowflake>,
) -> JoinNotice {
    JoinNotice {
        display_name,
        channel_name,
        introduction_link: introduction.map(|intro| intro.message_link(guild_id)),
    }
}

pub(crate) async fn on_voice_state_update(
    ctx: &Context,
    old: Option<&VoiceState>,
    new: &VoiceState,
    state: &BotState,
) {
    let old_channel = old
        .and_then(|voice| voice.channel_id)
        .map(|id| Snowflake::from(id.get()));
    let new_channel = new.channel_id.map(|id| Snowflake::from(id.get()));

    let Some(joined) = joined_channel(old_channel, new_channel, state.channels()) else {
        return;
    };

    let user_id = Snowflake::from(new.user_id.get());
    if let Err(e) = announce_join(ctx, new, joined, state).await {
        error!(
            error = %e,
            code = e.error_code(),
            user_id = %user_id,
            channel_id = %joined,
            "Failed to announce voice join"
        );
    }
}

async fn announce_join(
    ctx: &Context,
    voice: &VoiceState,
    joined: Snowflake,
    state: &BotState,
) -> AppResult<()> {
    let user_id = Snowflake::from(voice.user_id.get());
    let display_name = display_name(ctx, voice).await;
    let channel_name = channel_name(ctx, joined).await;
    info!(
        user_id = %user_id,
        member = %display_name,
        channel = %channel_name,
        "Member joined a monitored voice channel"
    );

    let notification_id = state.channels().notification_channel_id;
    let notify = match to_channel_id(notification_id) {
        Some(id) => id.to_channel(ctx).await.map_err(|e| {
            AppError::discord(format!("notification channel {notification_id} not found: {e}"))
        })?,
        None => return Err(AppError::discord("notification channel id is zero")),
    };

    let introduction = state.introductions().find_by_user(user_id).await?;
    let guild_id = voice.guild_id.map(|id| Snowflake::from(id.get()));
    let notice = build_notice(display_name, channel_name, introduction.as_ref(), guild_id);

    notify
        .id()
        .say(ctx, notice.to_string())
        .await
        .map_err(AppError::discord)?;

    info!(
        user_id = %user_id,
        has_introduction = notice.introduction_link.is_some(),
        "Sent voice join notice"
    );
    Ok(())
}

/// Member's display name, falling back to the account name and then a mention
async fn display_name(ctx: &Context, voice: &VoiceState) -> String {
    if let Some(member) = &voice.member {
        return member.display_name().to_string();
    }

    match voice.user_id.to_user(ctx).await {
        Ok(user) => user.display_name().to_string(),
        Err(_) => format!("<@{}>", voice.user_id),
    }
}

/// Voice channel name, or a channel mention when it cannot be resolved
async fn channel_name(ctx: &Context, channel_id: Snowflake) -> String {
    let resolved = match to_channel_id(channel_id) {
        Some(id) => id.to_channel(ctx).await.ok().and_then(Channel::guild),
        None => None,
    };

    resolved.map_or_else(|| format!("<#{channel_id}>"), |channel| channel.name)
}

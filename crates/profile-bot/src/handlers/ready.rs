//! Login and startup backfill
//!
//! On every ready event the recent history of the introduction channel is
//! scanned so posts made while the bot was offline are picked up. History
//! arrives newest first; only each author's newest post is stored.

use std::collections::HashSet;

use futures::StreamExt;
use serenity::all::{Context, Ready};
use tracing::{error, info, warn};

use profile_common::{AppError, AppResult};

use super::message::IntroPost;
use super::to_channel_id;
use crate::state::BotState;

/// Outcome of one backfill run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillSummary {
    /// Messages read from the channel history
    pub scanned: usize,
    /// Introductions written
    pub saved: usize,
    /// Introductions that failed to write
    pub failed: usize,
}

/// Keep the first post seen per human author.
///
/// `posts` must be ordered newest first, so the first post seen is the
/// newest one.
pub fn newest_per_author<I>(posts: I) -> Vec<IntroPost>
where
    I: IntoIterator<Item = IntroPost>,
{
    let mut seen = HashSet::new();
    posts
        .into_iter()
        .filter(|post| !post.from_bot && seen.insert(post.author_id))
        .collect()
}

/// Store every post, logging and counting the ones that fail
pub(crate) async fn store_all(state: &BotState, posts: &[IntroPost]) -> BackfillSummary {
    let mut summary = BackfillSummary::default();

    for post in posts {
        match post.store(state).await {
            Ok(_) => summary.saved += 1,
            Err(e) => {
                summary.failed += 1;
                warn!(
                    error = %e,
                    user_id = %post.author_id,
                    message_id = %post.message_id,
                    "Failed to store introduction during backfill"
                );
            }
        }
    }

    summary
}

pub(crate) async fn on_ready(ctx: &Context, ready: &Ready, state: &BotState) {
    info!(
        user = %ready.user.name,
        guilds = ready.guilds.len(),
        "Bot logged in"
    );

    match backfill(ctx, state).await {
        Ok(summary) => info!(
            scanned = summary.scanned,
            saved = summary.saved,
            failed = summary.failed,
            "Introduction backfill finished"
        ),
        Err(e) => error!(error = %e, code = e.error_code(), "Introduction backfill failed"),
    }
}

async fn backfill(ctx: &Context, state: &BotState) -> AppResult<BackfillSummary> {
    let channels = state.channels();
    let channel_id = to_channel_id(channels.introduction_channel_id).ok_or_else(|| {
        AppError::discord("introduction channel id is zero")
    })?;

    let channel = channel_id.to_channel(ctx).await.map_err(|e| {
        AppError::discord(format!("introduction channel {channel_id} not found: {e}"))
    })?;
    info!(
        channel = %channel,
        limit = channels.backfill_limit,
        "Scanning past introductions"
    );

    let mut history = std::pin::pin!(channel_id.messages_iter(ctx).take(channels.backfill_limit));
    let mut posts = Vec::new();
    while let Some(message) = history.next().await {
        let message = message.map_err(AppError::discord)?;
        posts.push(IntroPost::from(&message));
    }

    let scanned = posts.len();
    let latest = newest_per_author(posts);
    let summary = BackfillSummary {
        scanned,
        ..store_all(state, &latest).await
    };

    state.settings().mark_scan_completed().await?;
    Ok(summary)
}

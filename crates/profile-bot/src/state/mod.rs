//! Bot state
//!
//! Holds what every event handler needs: the channel layout and the
//! repositories behind it.

use std::sync::Arc;

use profile_common::ChannelConfig;
use profile_core::traits::{IntroductionRepository, SettingsRepository};
use profile_db::{PgIntroductionRepository, PgSettingsRepository, PoolManager};

/// State shared across all event handlers
#[derive(Clone)]
pub struct BotState {
    /// Channels the bot watches and posts to
    channels: Arc<ChannelConfig>,
    /// Introduction storage
    introductions: Arc<dyn IntroductionRepository>,
    /// Key/value flags
    settings: Arc<dyn SettingsRepository>,
}

impl BotState {
    /// Create a new BotState
    pub fn new(
        channels: ChannelConfig,
        introductions: Arc<dyn IntroductionRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            channels: Arc::new(channels),
            introductions,
            settings,
        }
    }

    /// Create state backed by the PostgreSQL repositories
    pub fn with_database(channels: ChannelConfig, db: Arc<PoolManager>) -> Self {
        Self::new(
            channels,
            Arc::new(PgIntroductionRepository::new(db.clone())),
            Arc::new(PgSettingsRepository::new(db)),
        )
    }

    /// Get the channel configuration
    pub fn channels(&self) -> &ChannelConfig {
        &self.channels
    }

    /// Get the introduction repository
    pub fn introductions(&self) -> &dyn IntroductionRepository {
        self.introductions.as_ref()
    }

    /// Get the settings repository
    pub fn settings(&self) -> &dyn SettingsRepository {
        self.settings.as_ref()
    }
}

impl std::fmt::Debug for BotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotState")
            .field("channels", &self.channels)
            .field("introductions", &"IntroductionRepository")
            .field("settings", &"SettingsRepository")
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory repositories for handler tests

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use profile_core::entities::{Introduction, Setting, SCAN_COMPLETED_KEY};
    use profile_core::traits::RepoResult;
    use profile_core::value_objects::Snowflake;

    use super::*;

    #[derive(Default)]
    pub struct MemoryIntroductions {
        pub rows: Mutex<HashMap<Snowflake, Introduction>>,
    }

    #[async_trait]
    impl IntroductionRepository for MemoryIntroductions {
        async fn save(
            &self,
            user_id: Snowflake,
            channel_id: Snowflake,
            message_id: Snowflake,
        ) -> RepoResult<bool> {
            let previous = self
                .rows
                .lock()
                .unwrap()
                .insert(user_id, Introduction::new(user_id, channel_id, message_id));
            Ok(previous.is_none())
        }

        async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Introduction>> {
            Ok(self.rows.lock().unwrap().get(&user_id).cloned())
        }

        async fn count(&self) -> RepoResult<i64> {
            Ok(self.rows.lock().unwrap().len() as i64)
        }

        async fn list_recent(&self, limit: i64) -> RepoResult<Vec<Introduction>> {
            let mut rows: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            rows.truncate(limit as usize);
            Ok(rows)
        }
    }

    #[derive(Default)]
    pub struct MemorySettings {
        pub values: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl SettingsRepository for MemorySettings {
        async fn get(&self, key: &str) -> RepoResult<Option<Setting>> {
            Ok(self.values.lock().unwrap().get(key).map(|value| Setting {
                key: key.to_string(),
                value: Some(value.clone()),
            }))
        }

        async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn is_scan_completed(&self) -> RepoResult<bool> {
            Ok(self
                .get(SCAN_COMPLETED_KEY)
                .await?
                .is_some_and(|s| s.is_true()))
        }

        async fn mark_scan_completed(&self) -> RepoResult<()> {
            self.set(SCAN_COMPLETED_KEY, "true").await
        }
    }

    pub fn channels() -> ChannelConfig {
        ChannelConfig {
            introduction_channel_id: Snowflake::new(100),
            notification_channel_id: Snowflake::new(200),
            voice_channel_ids: vec![Snowflake::new(300), Snowflake::new(301)],
            backfill_limit: 2000,
        }
    }

    /// State over fresh in-memory repositories, returned alongside them
    pub fn memory_state() -> (BotState, Arc<MemoryIntroductions>, Arc<MemorySettings>) {
        let intros = Arc::new(MemoryIntroductions::default());
        let settings = Arc::new(MemorySettings::default());
        let state = BotState::new(channels(), intros.clone(), settings.clone());
        (state, intros, settings)
    }
}

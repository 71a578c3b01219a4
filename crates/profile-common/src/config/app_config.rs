//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use std::env;
use std::str::FromStr;

use profile_core::Snowflake;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub discord: DiscordConfig,
    pub liveness: ServerConfig,
    pub channels: ChannelConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Liveness HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub command_timeout_secs: u64,
    /// Pin every connection's `search_path` to this schema
    pub schema: Option<String>,
}

/// Chat platform credentials
#[derive(Clone)]
pub struct DiscordConfig {
    pub token: String,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Channels the bot reads from and writes to
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Channel whose posts are self-introductions
    pub introduction_channel_id: Snowflake,
    /// Channel that receives voice-join notices
    pub notification_channel_id: Snowflake,
    /// Voice channels whose joins are announced
    pub voice_channel_ids: Vec<Snowflake>,
    /// How many recent introduction posts are scanned at startup
    pub backfill_limit: usize,
}

impl ChannelConfig {
    /// Check if joins to this voice channel are announced
    #[must_use]
    pub fn is_monitored(&self, channel_id: Snowflake) -> bool {
        self.voice_channel_ids.contains(&channel_id)
    }
}

// Default value functions
fn default_app_name() -> String {
    "profile-bot".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_command_timeout_secs() -> u64 {
    30
}

fn default_introduction_channel() -> Snowflake {
    Snowflake::new(1_300_659_373_227_638_794)
}

fn default_notification_channel() -> Snowflake {
    Snowflake::new(1_331_177_944_244_289_598)
}

fn default_voice_channels() -> Vec<Snowflake> {
    [
        1_300_291_307_750_559_754,
        1_302_151_049_368_571_925,
        1_302_151_154_981_011_486,
        1_306_190_768_431_431_721,
        1_306_190_915_483_734_026,
    ]
    .into_iter()
    .map(Snowflake::new)
    .collect()
}

fn default_backfill_limit() -> usize {
    2000
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or a
    /// value cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(&var, "DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_or(&var, "DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                command_timeout_secs: parse_or(
                    &var,
                    "DATABASE_COMMAND_TIMEOUT_SECS",
                    default_command_timeout_secs,
                )?,
                schema: var("DATABASE_SCHEMA"),
            },
            discord: DiscordConfig {
                token: var("DISCORD_TOKEN")
                    .or_else(|| var("TOKEN"))
                    .ok_or(ConfigError::MissingVar("DISCORD_TOKEN"))?,
            },
            liveness: ServerConfig {
                host: var("LIVENESS_HOST").unwrap_or_else(default_host),
                port: parse_or(&var, "PORT", default_port)?,
            },
            channels: ChannelConfig {
                introduction_channel_id: parse_or(
                    &var,
                    "INTRODUCTION_CHANNEL_ID",
                    default_introduction_channel,
                )?,
                notification_channel_id: parse_or(
                    &var,
                    "NOTIFICATION_CHANNEL_ID",
                    default_notification_channel,
                )?,
                voice_channel_ids: match var("TARGET_VOICE_CHANNEL_IDS") {
                    Some(list) => parse_id_list("TARGET_VOICE_CHANNEL_IDS", &list)?,
                    None => default_voice_channels(),
                },
                backfill_limit: parse_or(&var, "INTRO_BACKFILL_LIMIT", default_backfill_limit)?,
            },
        })
    }
}

fn parse_or<T, V, D>(var: &V, key: &'static str, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    V: Fn(&str) -> Option<String>,
    D: FnOnce() -> T,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

fn parse_id_list(key: &'static str, raw: &str) -> Result<Vec<Snowflake>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Snowflake::parse(s).map_err(|_| ConfigError::InvalidValue(key, s.to_string())))
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DATABASE_URL", "postgres://bot@localhost/profile"),
            ("DISCORD_TOKEN", "token"),
        ]
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&required())).unwrap();

        assert_eq!(config.app.name, "profile-bot");
        assert!(config.app.env.is_development());
        assert_eq!(config.liveness.address(), "0.0.0.0:8080");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 1);
        assert_eq!(config.database.command_timeout_secs, 30);
        assert!(config.database.schema.is_none());
        assert_eq!(
            config.channels.introduction_channel_id,
            Snowflake::new(1_300_659_373_227_638_794)
        );
        assert_eq!(config.channels.voice_channel_ids.len(), 5);
        assert_eq!(config.channels.backfill_limit, 2000);
    }

    #[test]
    fn test_missing_database_url() {
        let err = AppConfig::from_lookup(lookup(&[("DISCORD_TOKEN", "t")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("DISCORD_TOKEN", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DISCORD_TOKEN")));
    }

    #[test]
    fn test_legacy_token_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("TOKEN", "legacy"),
        ]))
        .unwrap();
        assert_eq!(config.discord.token, "legacy");
    }

    #[test]
    fn test_overrides() {
        let mut vars = required();
        vars.extend([
            ("APP_ENV", "Production"),
            ("PORT", "3000"),
            ("INTRODUCTION_CHANNEL_ID", "11"),
            ("NOTIFICATION_CHANNEL_ID", "22"),
            ("TARGET_VOICE_CHANNEL_IDS", "33, 44,,55"),
            ("DATABASE_SCHEMA", "bot"),
        ]);
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert!(config.app.env.is_production());
        assert_eq!(config.liveness.port, 3000);
        assert_eq!(config.channels.introduction_channel_id, Snowflake::new(11));
        assert_eq!(config.channels.notification_channel_id, Snowflake::new(22));
        assert_eq!(
            config.channels.voice_channel_ids,
            vec![Snowflake::new(33), Snowflake::new(44), Snowflake::new(55)]
        );
        assert!(config.channels.is_monitored(Snowflake::new(44)));
        assert!(!config.channels.is_monitored(Snowflake::new(11)));
        assert_eq!(config.database.schema.as_deref(), Some("bot"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut vars = required();
        vars.push(("PORT", "eighty"));
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("PORT", _)));

        let mut vars = required();
        vars.push(("TARGET_VOICE_CHANNEL_IDS", "1,abc"));
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for TARGET_VOICE_CHANNEL_IDS: abc"
        );
    }

    #[test]
    fn test_database_settings_are_strict() {
        let mut vars = required();
        vars.push(("DATABASE_MAX_CONNECTIONS", "abc"));
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS", _)));

        let mut vars = required();
        vars.push(("DATABASE_COMMAND_TIMEOUT_SECS", "-5"));
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("DATABASE_COMMAND_TIMEOUT_SECS", _)));

        let mut vars = required();
        vars.push(("DATABASE_SCHEMA", ""));
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(config.database.schema.is_none());
    }

    #[test]
    fn test_token_is_redacted_in_debug() {
        let config = DiscordConfig {
            token: "secret".to_string(),
        };
        assert!(!format!("{config:?}").contains("secret"));
    }
}

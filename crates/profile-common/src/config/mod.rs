//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ChannelConfig, ConfigError, DatabaseConfig, DiscordConfig,
    Environment, ServerConfig,
};

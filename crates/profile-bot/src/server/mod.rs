//! Process setup
//!
//! Wires configuration, the database, the liveness listener and the gateway
//! client together, then runs until the gateway connection ends.

use std::sync::Arc;
use std::time::Duration;

use serenity::Client;
use tracing::info;

use profile_common::{AppConfig, AppError, AppResult};
use profile_db::{migrations, PoolManager};

use crate::handlers::{intents, Handler};
use crate::liveness;
use crate::state::BotState;

/// Map application database settings onto the pool configuration
pub fn database_config(config: &profile_common::DatabaseConfig) -> profile_db::DatabaseConfig {
    profile_db::DatabaseConfig {
        url: config.url.clone(),
        max_connections: config.max_connections,
        min_connections: config.min_connections,
        command_timeout: Duration::from_secs(config.command_timeout_secs),
        schema: config.schema.clone(),
        ..Default::default()
    }
}

/// Run the bot with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    // Database and schema
    info!("Connecting to PostgreSQL...");
    let db = Arc::new(PoolManager::new(database_config(&config.database)));
    migrations::init_all(&db).await?;
    info!("Database schema ready");

    // Liveness endpoint
    let listener = liveness::bind(&config.liveness).await?;
    tokio::spawn(liveness::serve(listener, config.app.name.clone()));

    // Gateway client
    let state = BotState::with_database(config.channels.clone(), db.clone());
    let mut client = Client::builder(&config.discord.token, intents())
        .event_handler(Handler::new(state))
        .await
        .map_err(AppError::discord)?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received, closing gateway connections");
            shard_manager.shutdown_all().await;
        }
    });

    info!("Connecting to the gateway...");
    let result = client.start().await.map_err(AppError::discord);

    db.close().await;
    result
}

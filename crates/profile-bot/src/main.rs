//! Introduction bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p profile-bot
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use profile_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Initialize tracing; the log format follows APP_ENV when it could be read
    let env = config.as_ref().map(|c| c.app.env).unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.liveness.port,
        voice_channels = config.channels.voice_channel_ids.len(),
        "Configuration loaded"
    );

    if let Err(e) = profile_bot::run(config).await {
        error!(
            error = %e,
            code = e.error_code(),
            fatal = e.is_fatal(),
            "Bot stopped with an error"
        );
        std::process::exit(1);
    }
}

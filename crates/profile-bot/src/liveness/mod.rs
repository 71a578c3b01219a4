//! Liveness endpoint
//!
//! A tiny HTTP listener so the hosting platform sees the process as alive.
//! It shares nothing with the bot beyond the process.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use profile_common::{AppError, AppResult, ServerConfig};

/// Build the liveness router
pub fn router(app_name: &str) -> Router {
    let name: Arc<str> = Arc::from(app_name);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::SERVICE_UNAVAILABLE,
                    Duration::from_secs(10),
                )),
        )
        .with_state(name)
}

/// GET /
async fn index(State(name): State<Arc<str>>) -> String {
    format!("{name} is running!")
}

/// GET /health
async fn health_check() -> &'static str {
    "OK"
}

/// Bind the listener. Failing to bind is fatal to startup.
pub async fn bind(config: &ServerConfig) -> AppResult<TcpListener> {
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Liveness endpoint listening on http://{}", addr);
    Ok(listener)
}

/// Serve until the process exits; errors are logged, not propagated
pub async fn serve(listener: TcpListener, app_name: String) {
    if let Err(e) = axum::serve(listener, router(&app_name)).await {
        error!(error = %e, "Liveness server stopped");
    }
}

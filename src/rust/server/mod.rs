//! HTTP surface: `GET /`, `GET /health` and `POST /predict`.

use std::sync::Arc;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use log::info;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::model_holder::ModelHolder;

mod error;
mod handlers;
pub mod schema;

pub use error::ApiError;
pub use handlers::{SERVICE_DESCRIPTION, SERVICE_TITLE};

/// State shared by every handler. Read-only once the server starts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub model: ModelHolder,
}

pub fn router(model: ModelHolder) -> Router {
    let state = Arc::new(AppState { model });

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .with_state(state)
}

/// Serves on an already bound listener until ctrl-c.
pub async fn serve_on(listener: TcpListener, model: ModelHolder) -> Result<()> {
    let app = router(model);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn serve(config: &ServerConfig, model: ModelHolder) -> Result<()> {
    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server ready on http://{}", listener.local_addr()?);
    serve_on(listener, model).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

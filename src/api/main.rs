//! promptcraft-api: HTTP server for prompt optimization
//!
//! Run with: PORT=5000 cargo run --bin promptcraft-api

use anyhow::Context;
use std::sync::Arc;

use promptcraft::config::{self, Config};
use promptcraft::logging;
use promptcraft::server::{self, AppState};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cfg = Config::load()?;
    let tool_analysis = config::load_tool_analysis(&cfg.tool_analysis_path)?;
    let state = Arc::new(AppState::new(tool_analysis));

    let app = server::router(state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "promptcraft-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

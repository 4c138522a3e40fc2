use std::sync::Arc;

use anyhow::Context;
use skeptic_verifier::config::VerifierConfig;
use skeptic_verifier::router;
use skeptic_verifier::state::AppState;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Skeptic verifier starting...");

    let config = VerifierConfig::from_env().context("invalid configuration")?;
    let bind_addr = config.bind_addr;
    let state = AppState::new(config).context("failed to build vision client")?;
    info!("Verification mode: {}", state.mode());

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    info!("Skeptic verifier stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

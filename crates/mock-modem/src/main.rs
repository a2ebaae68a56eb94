//! mock-modem: serves the dashboard API from memory for local development.

use std::sync::Arc;

use anyhow::Context;
use mock_modem::{router, MockConfig, MockModem};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = MockConfig::from_env();
    info!(
        port = ?config.modem_port,
        auto_connect = config.auto_connect,
        "mock modem configured"
    );

    let app = router(Arc::new(MockModem::new(&config)));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    info!(address = %config.listen_addr, "mock modem listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

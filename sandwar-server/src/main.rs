//! Sandwar Gateway - Headless Daemon
//!
//! A pure Rust HTTP server that:
//! - Relays browser requests to the community backend on /api/proxy/*
//! - Reports gateway status on /api/status
//! - Answers health probes on /health and /healthz
//!
//! Browsers cannot call a plain-HTTP or cross-origin backend directly; this
//! daemon sits on the deployed origin and forwards for them.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod router;
mod state;

#[cfg(test)]
mod test_helpers;

use sandwar_types::GatewayConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::from_env();
    info!("Starting Sandwar gateway on {}:{}", config.host, config.port);
    info!("Forwarding /api/proxy/* to {}", config.api_url);

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Gateway listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

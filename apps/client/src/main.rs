use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use client::app::bootstrap;
use client::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting client v{}", env!("CARGO_PKG_VERSION"));

    let ctx = bootstrap(config);

    match ctx.session.snapshot() {
        Some(session) => info!(
            "Restored session: {} ({})",
            session.identity.email, session.identity.role
        ),
        None => info!("No persisted session; starting anonymous"),
    }

    // Smoke probe: model info needs no auth and proves the backend is up.
    match ctx.evaluation.load_model_info().await {
        Some(model) => info!(
            "Backend reachable; model {} is {}",
            model.model_version, model.status
        ),
        None => anyhow::bail!("backend at {} is not reachable", ctx.config.api_base_url),
    }

    Ok(())
}

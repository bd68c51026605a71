//! Colour API server
//!
//! Serves the colour enumeration, its option lists and the form echo as
//! JSON. See `enum_select::config` for the environment variables it reads.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enum_select::api::build_router;
use enum_select::colours::UserColour;
use enum_select::config::ServerConfig;
use enum_select::lookup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enum_select=debug,colour_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("Starting colour server with {:?}", config);

    if config.warmup {
        let warmup = lookup::spawn_warmup::<UserColour>();
        tokio::spawn(async move {
            match warmup.await {
                Ok(count) => tracing::info!("Description cache warmed ({} colours)", count),
                Err(e) => tracing::warn!("Description cache warmup failed: {}", e),
            }
        });
    }

    let app = build_router();
    let addr = config.bind_addr();

    tracing::info!("");
    tracing::info!("===========================================");
    tracing::info!("  Colour server running on http://{}", addr);
    tracing::info!("===========================================");
    tracing::info!("");
    tracing::info!("API Endpoints:");
    tracing::info!("  /api/health            - Health and cache stats");
    tracing::info!("  /api/colours           - List colours");
    tracing::info!("  /api/colours/options   - Dropdown options");
    tracing::info!("  /api/colours/checkboxes - Checkbox options");
    tracing::info!("  /api/colours/lookup    - Colour by description");
    tracing::info!("  /api/colours/form      - Form model (GET) / submit (POST)");
    tracing::info!("");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

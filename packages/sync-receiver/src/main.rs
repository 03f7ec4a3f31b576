// Main entry point for the sync receiver

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;

use app::build_app;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sync_receiver=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting material sync receiver");

    let addr =
        std::env::var("SYNC_RECEIVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let origin = std::env::var("SYNC_ALLOWED_ORIGIN")
        .unwrap_or_else(|_| "https://playcanvas.com".to_string());

    let app = build_app(&origin);

    tracing::info!("Listening on {}", addr);
    tracing::info!("Sync endpoint: http://{}/sync-material", addr);
    tracing::info!("Allowed origin: {}", origin);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

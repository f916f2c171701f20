mod config;
mod handlers;
mod muse;
mod request_context;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use portfolio_shared::content_store::FileKvStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env()?;

    tracing::info!("Starting portfolio content API");
    tracing::info!("Content store: {}", config.kv_dir.display());
    tracing::info!(?config.muse, "Muse configuration");

    let store = FileKvStore::new(config.kv_dir.clone());
    let muse = muse::MuseClient::new(config.muse.clone());
    if !muse.is_configured() {
        tracing::warn!("GEMINI_API_KEY is not set; /api/muse will answer with a placeholder");
    }

    let app = routes::create_router(state::AppState::new(Arc::new(store), muse));

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

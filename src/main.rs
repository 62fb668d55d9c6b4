// UGC Fashion Creator: upload fashion photos, get fake item labels and a
// social-media caption back.

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ugc_fashion_creator::{app, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing(); // after dotenv so RUST_LOG from .env applies
    if let Err(e) = dotenv {
        warn!("No .env loaded: {e}");
    }

    let config = Config::from_env()?;
    let app = app(&config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!("🚀 Server running on http://{}", listener.local_addr()?);
    info!("📸 Open in your browser to start creating UGC!");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ugc_fashion_creator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

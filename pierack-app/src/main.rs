//! Pierack server entry point

use pierack_app::{build_router, AppState, PierackConfig};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pierack=info")),
        )
        .init();

    let config = PierackConfig::load()?;
    let bind = config.bind.clone();

    let state = AppState::from_config(config).await?;
    let router = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("pierack listening on http://{}", bind);

    axum::serve(listener, router).await?;

    Ok(())
}

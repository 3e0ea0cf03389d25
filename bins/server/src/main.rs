//! Splitbook API Server
//!
//! Main entry point for the Splitbook backend service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use splitbook_api::{AppState, create_router};
use splitbook_db::Store;
use splitbook_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splitbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let jwt_service = JwtService::new(JwtConfig::from(&config.jwt));
    info!(
        access_ttl_secs = config.jwt.access_token_expiry_secs,
        refresh_ttl_secs = config.jwt.refresh_token_expiry_secs,
        "JWT service configured"
    );

    let state = AppState::new(Store::new(), jwt_service, config.summary.clone());
    info!(
        recent_expenses_limit = config.summary.recent_expenses_limit,
        "In-memory store ready"
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use limit_refresh::{
    GatewayRefresher, IdentityProvider, LIMIT_GATEWAY_URL, SAMS_HOST_NAME,
    SqliteLinkedAccountStore,
};
use limit_refresh_axum::{AppState, refresh_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    let store = SqliteLinkedAccountStore::new(pool);
    store.init().await?;

    let state = AppState::new(
        Arc::new(store),
        Arc::new(GatewayRefresher::new(LIMIT_GATEWAY_URL.as_str())),
        IdentityProvider::openidconnect(SAMS_HOST_NAME.as_str()),
    );

    // The refresh endpoint is administrative; mount it under an internal
    // prefix and keep it off the public router in real deployments.
    let app = Router::new().nest("/.internal", refresh_router(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3001").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

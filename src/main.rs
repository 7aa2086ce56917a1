use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use interior_quote::{
    app, cache::TotalsCache, config::Config, pricing::RateConfiguration, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interior_quote=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting interior quotation service");
    tracing::info!("Server binding to: {}", config.bind_address());

    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database_max_connections
    );

    let state = AppState {
        db,
        cache: TotalsCache::new(config.totals_cache_capacity, config.totals_cache_ttl),
        default_rates: Arc::new(RateConfiguration::default()),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    tracing::info!("Server started at http://{}", config.bind_address());
    axum::serve(listener, app(state)).await?;

    Ok(())
}

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use rss_aggregator::infrastructure::config::{Config, LogFormat};
use rss_aggregator::infrastructure::db::{check_connection, create_pool};
use rss_aggregator::infrastructure::http::start_http_server;
use rss_aggregator::infrastructure::repositories::{InMemoryStore, Repositories};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting rss-aggregator on {}:{}",
        config.host,
        config.port
    );

    // === DEPENDENCY INJECTION SETUP ===
    let repos = if config.uses_memory_store() {
        if !config.is_development() {
            tracing::warn!("Using the in-memory store outside development; data is lost on restart");
        }
        tracing::info!("Using in-memory store");
        Repositories::in_memory(Arc::new(InMemoryStore::new()))
    } else {
        // Create database connection pool
        let pool = create_pool(&config.database_url, config.db_max_connections).await?;
        tracing::info!("Database connection pool created");

        // Verify database connection
        check_connection(&pool).await?;
        tracing::info!("Database connection verified");

        Repositories::postgres(Arc::new(pool))
    };

    start_http_server(Arc::new(config), repos).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rss_aggregator=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

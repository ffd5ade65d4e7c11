//! bookreviews server binary

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bookreviews::api::{create_router, AppState};
use bookreviews::config::{AppConfig, LogFormat};
use bookreviews::storage::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let options = config
        .database_options()
        .context("invalid database configuration")?;
    let db = Database::new(options).context("failed to prepare database path")?;
    tracing::info!(path = %db.path().display(), "Using review store");

    if config.database.create_schema {
        db.init_schema()
            .await
            .context("failed to initialise database schema")?;
    }

    let router = create_router(AppState::new(db));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("bookreviews=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}

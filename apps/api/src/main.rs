mod config;
mod dates;
mod db;
mod errors;
mod export;
mod models;
mod normalize;
mod preview;
mod render;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::{Notify, RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::db::{create_pool, ensure_schema};
use crate::preview::spawn_preview_driver;
use crate::render::TemplateSelection;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{LocalStore, PgStore, ResumeStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the persistence backend
    let store: Arc<dyn ResumeStore> = match config.storage_backend {
        StorageBackend::Local => Arc::new(LocalStore::open(&config.data_dir)?),
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgStore::new(pool))
        }
    };
    info!("Storage backend: {}", store.backend_name());

    // Shared template selection and the preview refresh signal
    let selection = Arc::new(RwLock::new(TemplateSelection::of(config.default_template)));
    let refresh = Arc::new(Notify::new());

    // Start the live preview driver
    let preview_rx = spawn_preview_driver(
        Arc::clone(&store),
        Arc::clone(&selection),
        Arc::clone(&refresh),
        config.preview_user_id,
        Duration::from_millis(config.preview_poll_ms),
    );

    // Build app state
    let state = AppState {
        store,
        config: config.clone(),
        selection,
        preview_rx,
        refresh,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

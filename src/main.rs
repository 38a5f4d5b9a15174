//! Tool Shelf entry point.
//!
//! Loads configuration, initializes logging, builds the configured tool store,
//! mounts the list view once and serves the page until Ctrl-C.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tool_shelf::adapters::http::{build_app, PageRenderer, ToolShelfState};
use tool_shelf::adapters::http::tools::RenderError;
use tool_shelf::adapters::{FirestoreConfig, FirestoreToolStore, InMemoryToolStore};
use tool_shelf::application::ToolListView;
use tool_shelf::config::{
    AppConfig, ConfigError, ServerConfig, StoreBackend, StoreConfig, ValidationError,
};
use tool_shelf::ports::{StoreError, ToolStore};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build tool store: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_logging(&config.server);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        backend = ?config.store.backend,
        "Starting tool shelf"
    );

    if config.is_production() && config.store.backend == StoreBackend::Memory {
        warn!("In-memory store in production; tools are lost on restart");
    }

    let store = build_store(&config.store)?;
    let mut view = ToolListView::new(store, config.ui.view_settings());
    if let Ok(count) = view.mount().await {
        info!(count, "Tool list mounted");
    }

    let state = ToolShelfState::new(view, PageRenderer::new()?);
    let app = build_app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Ready - listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

fn build_store(config: &StoreConfig) -> Result<Arc<dyn ToolStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryToolStore::new())),
        StoreBackend::Firestore => {
            let project_id = config.project_id.clone().unwrap_or_default();
            let mut firestore = FirestoreConfig::new(project_id)
                .with_database(config.database.clone())
                .with_collection(config.collection.clone())
                .with_base_url(config.base_url.clone());
            if let Some(key) = config.api_key.clone().filter(|_| config.has_api_key()) {
                firestore = firestore.with_api_key(key);
            }
            if let Some(timeout) = config.timeout() {
                firestore = firestore.with_timeout(timeout);
            }
            Ok(Arc::new(FirestoreToolStore::new(firestore)?))
        }
    }
}

/// `RUST_LOG` wins over the configured filter.
fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

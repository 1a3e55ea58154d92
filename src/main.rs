use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ideaboard_backend::blob::BlobStore;
use ideaboard_backend::config::Config;
use ideaboard_backend::store::{self, IdeaStore};
use ideaboard_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Idea Board Backend");
    tracing::info!("Store backend: {}", config.store_backend.as_str());
    tracing::info!("Upload dir: {:?}", config.upload_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize storage
    let store = store::init_store(&config).await?;
    store.bootstrap().await?;

    let blobs = Arc::new(BlobStore::new(config.upload_dir.clone()));

    // Create application state
    let state = AppState {
        store,
        blobs,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

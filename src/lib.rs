//! Idea Board Backend
//!
//! An idea submission and voting board: clients create ideas, list them
//! ordered by vote count, and cast votes that atomically increment a
//! counter. Persistence is pluggable (SQLite table or flat JSON document)
//! behind the `store::IdeaStore` port; uploaded images land in the blob
//! store and are served back at `/uploads`.

pub mod api;
pub mod blob;
pub mod board;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use blob::BlobStore;
use config::Config;
use store::IdeaStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn IdeaStore>,
    pub blobs: Arc<BlobStore>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .route("/ideas", get(api::list_ideas).post(api::create_idea))
        .route("/ideas/{id}/vote", post(api::vote))
        .route("/upload", post(api::upload_image))
        .route("/setup", get(api::setup))
        .route("/health", get(health_check))
        .nest_service("/uploads", uploads)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

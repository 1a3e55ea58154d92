//! Storage bootstrap endpoint.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::SetupResponse;
use crate::store::IdeaStore;
use crate::AppState;

/// GET /setup - Idempotent storage initialization.
pub async fn setup(State(state): State<AppState>) -> Result<Json<SetupResponse>, AppError> {
    match state.store.bootstrap().await {
        Ok(()) => Ok(Json(SetupResponse {
            message: "Database initialized".to_string(),
        })),
        Err(e) => {
            tracing::error!("Error initializing storage: {}", e);
            Err(AppError::Persistence(
                "Failed to initialize database".to_string(),
            ))
        }
    }
}

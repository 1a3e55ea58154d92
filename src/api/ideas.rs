//! Idea API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::{Idea, NewIdea};
use crate::store::IdeaStore;
use crate::AppState;

/// GET /ideas - List all ideas, most-voted first.
pub async fn list_ideas(State(state): State<AppState>) -> Result<Json<Vec<Idea>>, AppError> {
    match state.store.list().await {
        Ok(ideas) => Ok(Json(ideas)),
        Err(e) => {
            tracing::error!("Error fetching ideas: {}", e);
            Err(AppError::Persistence("Failed to fetch ideas".to_string()))
        }
    }
}

/// POST /ideas - Create a new idea.
///
/// Empty titles and descriptions are a client-side concern and pass through
/// unchecked here.
pub async fn create_idea(
    State(state): State<AppState>,
    Json(body): Json<NewIdea>,
) -> Result<Json<Idea>, AppError> {
    match state.store.create(&body).await {
        Ok(idea) => Ok(Json(idea)),
        Err(e) => {
            tracing::error!("Error adding idea: {}", e);
            Err(AppError::Persistence("Failed to add idea".to_string()))
        }
    }
}

/// POST /ideas/{id}/vote - Cast a vote and return the updated idea.
pub async fn vote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Idea>, AppError> {
    match state.store.increment_vote(&id).await {
        Ok(idea) => Ok(Json(idea)),
        Err(e) => {
            tracing::error!("Error updating votes: {}", e);
            Err(AppError::Persistence("Failed to update votes".to_string()))
        }
    }
}

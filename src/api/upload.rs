//! Image upload endpoint.

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::UploadResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub filename: String,
}

/// POST /upload?filename=<name> - Store a raw file body, return its URL.
///
/// Clients call this before creating an idea; the returned URL goes into
/// the idea's `image_url`.
pub async fn upload_image(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<UploadResponse>, AppError> {
    match state.blobs.put(&params.filename, &body).await {
        Ok(url) => Ok(Json(UploadResponse { url })),
        Err(e) => {
            tracing::error!("Error storing upload: {}", e);
            Err(AppError::Persistence("Failed to store upload".to_string()))
        }
    }
}

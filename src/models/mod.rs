//! Data models for the idea-board application.
//!
//! The wire format is snake_case JSON matching the stored column names.

mod idea;

pub use idea::*;

use serde::{Deserialize, Serialize};

/// Response body for a successful image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Response body for the storage bootstrap endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupResponse {
    pub message: String,
}

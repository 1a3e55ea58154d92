//! Persistence port for ideas.
//!
//! One interface, two interchangeable adapters. The backend is chosen once,
//! at process start, from configuration; everything else talks to the trait.

mod document;
mod relational;

pub use document::DocumentIdeaStore;
pub use relational::RelationalIdeaStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, StoreBackend};
use crate::errors::AppError;
use crate::models::{Idea, NewIdea};

/// Abstracts the underlying idea storage (relational table or flat document).
///
/// Implementations must make `increment_vote` a single atomic
/// read-modify-write at the store boundary; concurrent votes on the same id
/// all land.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Idempotent storage initialization (schema or document file).
    async fn bootstrap(&self) -> Result<(), AppError>;

    /// Insert a new idea with `votes = 0` and return the stored record,
    /// including the generated id.
    async fn create(&self, idea: &NewIdea) -> Result<Idea, AppError>;

    /// All ideas, descending by votes; ties keep insertion order.
    async fn list(&self) -> Result<Vec<Idea>, AppError>;

    /// Add 1 to the vote count of the matching idea and return the updated
    /// record. Errors if the id does not exist.
    async fn increment_vote(&self, id: &str) -> Result<Idea, AppError>;
}

/// Construct the adapter selected by configuration.
pub async fn init_store(config: &Config) -> Result<Arc<dyn IdeaStore>, AppError> {
    match config.store_backend {
        StoreBackend::Relational => Ok(Arc::new(
            RelationalIdeaStore::connect(&config.db_path).await?,
        )),
        StoreBackend::Document => Ok(Arc::new(DocumentIdeaStore::open(&config.doc_path).await?)),
    }
}

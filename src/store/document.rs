//! Flat JSON document adapter for the idea store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::IdeaStore;
use crate::errors::AppError;
use crate::models::{Idea, IdeaId, NewIdea};

/// On-disk shape: the idea list in insertion order.
#[derive(Debug, Default, Serialize, Deserialize)]
struct BoardDocument {
    ideas: Vec<Idea>,
}

/// Idea store backed by a single JSON document on disk.
///
/// The mutex spans every read-modify-write, so the vote increment is atomic
/// at the store boundary. Ids are epoch-millisecond strings, bumped until
/// unique when two creates land in the same millisecond.
pub struct DocumentIdeaStore {
    path: PathBuf,
    state: Mutex<BoardDocument>,
}

impl DocumentIdeaStore {
    /// Load the document, starting empty if the file does not exist yet.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        let doc = match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BoardDocument::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            state: Mutex::new(doc),
        })
    }

    async fn persist(&self, doc: &BoardDocument) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
        let bytes = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    fn next_id(doc: &BoardDocument) -> String {
        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let candidate = millis.to_string();
            let taken = doc
                .ideas
                .iter()
                .any(|i| matches!(&i.id, IdeaId::Text(s) if *s == candidate));
            if !taken {
                return candidate;
            }
            millis += 1;
        }
    }
}

#[async_trait]
impl IdeaStore for DocumentIdeaStore {
    async fn bootstrap(&self) -> Result<(), AppError> {
        let doc = self.state.lock().await;
        self.persist(&doc).await
    }

    async fn create(&self, idea: &NewIdea) -> Result<Idea, AppError> {
        let mut doc = self.state.lock().await;
        let id = Self::next_id(&doc);

        let stored = Idea {
            id: IdeaId::Text(id),
            title: idea.title.clone(),
            description: idea.description.clone(),
            votes: 0,
            tags: idea.tags.clone(),
            author: idea.author.clone(),
            image_url: idea.image_url.clone(),
        };

        doc.ideas.push(stored.clone());
        self.persist(&doc).await?;

        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Idea>, AppError> {
        let doc = self.state.lock().await;
        let mut ideas = doc.ideas.clone();
        // Stable sort keeps insertion order within equal vote counts.
        ideas.sort_by(|a, b| b.votes.cmp(&a.votes));
        Ok(ideas)
    }

    async fn increment_vote(&self, id: &str) -> Result<Idea, AppError> {
        let mut doc = self.state.lock().await;

        let idea = doc
            .ideas
            .iter_mut()
            .find(|i| matches!(&i.id, IdeaId::Text(s) if s == id))
            .ok_or_else(|| AppError::Persistence("idea not found".to_string()))?;

        idea.votes += 1;
        let updated = idea.clone();

        self.persist(&doc).await?;

        Ok(updated)
    }
}

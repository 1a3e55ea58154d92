//! Idea model and request bodies.

use serde::{Deserialize, Serialize};

/// Store-assigned idea identifier.
///
/// The relational adapter issues sequential integers, the document adapter
/// timestamp-derived strings; the untagged representation keeps each
/// adapter's native shape on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum IdeaId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for IdeaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdeaId::Int(n) => write!(f, "{}", n),
            IdeaId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A submitted idea.
///
/// Created once, voted on any number of times, never edited or deleted.
/// `image_url` is `None` when no image was attached; it serializes as JSON
/// `null`, never an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub votes: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    pub image_url: Option<String>,
}

/// Request body for creating a new idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

//! Headless client board.
//!
//! The board's markup renders elsewhere; this module owns its wiring: a
//! typed HTTP client for the backend, an explicit cache with a bounded
//! staleness window, and the reconciliation rule that a server-returned
//! record always replaces optimistic local state.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::{Idea, IdeaId, NewIdea, UploadResponse};

/// Tag catalog offered by the submission form.
pub const PREDEFINED_TAGS: &[&str] = &[
    "Cinema 4D",
    "Photoshop",
    "Blender",
    "Unity",
    "Unreal Engine",
    "JavaScript",
    "Python",
    "React",
    "Vue.js",
    "Angular",
    "AI",
    "Machine Learning",
    "VR",
    "AR",
    "Blockchain",
    "Gaming",
    "Web Development",
    "Mobile Apps",
    "IoT",
    "Robotics",
];

/// Default re-fetch interval, doubling as the cache staleness window.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Errors surfaced by board operations.
#[derive(Debug)]
pub enum BoardError {
    /// Rejected before any network call was made.
    Validation(String),
    /// Transport-level failure.
    Request(reqwest::Error),
    /// Non-2xx response from the backend.
    Api(u16),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::Validation(msg) => write!(f, "validation error: {}", msg),
            BoardError::Request(e) => write!(f, "request failed: {}", e),
            BoardError::Api(status) => write!(f, "server responded with status {}", status),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        BoardError::Request(err)
    }
}

/// A new idea being composed in the form.
#[derive(Debug, Clone, Default)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: String,
    /// Filename and bytes of an image to upload before the idea is created.
    pub image: Option<(String, Vec<u8>)>,
}

impl IdeaDraft {
    /// Toggle a tag's membership, preserving the order of the others.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    fn validate(&self) -> Result<(), BoardError> {
        if self.title.trim().is_empty() {
            return Err(BoardError::Validation("title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(BoardError::Validation(
                "description is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Typed client for the board's HTTP surface.
#[derive(Clone)]
pub struct BoardClient {
    http: reqwest::Client,
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_ideas(&self) -> Result<Vec<Idea>, BoardError> {
        let resp = self.http.get(self.url("/ideas")).send().await?;
        if !resp.status().is_success() {
            return Err(BoardError::Api(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    pub async fn create_idea(&self, idea: &NewIdea) -> Result<Idea, BoardError> {
        let resp = self.http.post(self.url("/ideas")).json(idea).send().await?;
        if !resp.status().is_success() {
            return Err(BoardError::Api(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    pub async fn vote(&self, id: &IdeaId) -> Result<Idea, BoardError> {
        let resp = self
            .http
            .post(self.url(&format!("/ideas/{}/vote", id)))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(BoardError::Api(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    pub async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, BoardError> {
        let resp = self
            .http
            .post(self.url("/upload"))
            .query(&[("filename", filename)])
            .body(bytes)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(BoardError::Api(resp.status().as_u16()));
        }
        let body: UploadResponse = resp.json().await?;
        Ok(body.url)
    }
}

/// Cached idea list with a bounded staleness window.
#[derive(Debug)]
pub struct BoardCache {
    ideas: Vec<Idea>,
    fetched_at: Option<Instant>,
    staleness: Duration,
}

impl BoardCache {
    pub fn new(staleness: Duration) -> Self {
        Self {
            ideas: Vec::new(),
            fetched_at: None,
            staleness,
        }
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// True before the first fetch, and again once the window elapses.
    pub fn is_stale(&self) -> bool {
        match self.fetched_at {
            Some(at) => at.elapsed() >= self.staleness,
            None => true,
        }
    }

    /// Replace the whole cache with a fresh server listing.
    pub fn replace(&mut self, ideas: Vec<Idea>) {
        self.ideas = ideas;
        self.fetched_at = Some(Instant::now());
    }

    /// Apply one canonical server record: it replaces any local copy with
    /// the same id, or is appended if unseen, then the list is re-sorted to
    /// match the server's ordering.
    pub fn apply(&mut self, idea: Idea) {
        if let Some(pos) = self.ideas.iter().position(|i| i.id == idea.id) {
            self.ideas[pos] = idea;
        } else {
            self.ideas.push(idea);
        }
        self.ideas.sort_by(|a, b| b.votes.cmp(&a.votes));
    }
}

/// The board component: client + cache + refresh pacing.
pub struct Board {
    client: BoardClient,
    cache: BoardCache,
}

impl Board {
    pub fn new(client: BoardClient) -> Self {
        Self::with_refresh_interval(client, DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_refresh_interval(client: BoardClient, interval: Duration) -> Self {
        Self {
            client,
            cache: BoardCache::new(interval),
        }
    }

    /// The currently displayed ideas (possibly stale).
    pub fn ideas(&self) -> &[Idea] {
        self.cache.ideas()
    }

    pub fn is_stale(&self) -> bool {
        self.cache.is_stale()
    }

    /// Fetch the full listing and replace the cache.
    pub async fn refresh(&mut self) -> Result<(), BoardError> {
        let ideas = self.client.list_ideas().await?;
        self.cache.replace(ideas);
        Ok(())
    }

    /// Validate, upload the attached image if any, then create the idea and
    /// apply the server's canonical record. A failed upload means the idea
    /// is never submitted.
    pub async fn submit(&mut self, draft: IdeaDraft) -> Result<Idea, BoardError> {
        draft.validate()?;

        let image_url = match draft.image {
            Some((filename, bytes)) => Some(self.client.upload_image(&filename, bytes).await?),
            None => None,
        };

        let created = self
            .client
            .create_idea(&NewIdea {
                title: draft.title,
                description: draft.description,
                tags: draft.tags,
                author: draft.author,
                image_url,
            })
            .await?;

        self.cache.apply(created.clone());
        Ok(created)
    }

    /// Cast a vote and apply the updated record.
    pub async fn vote(&mut self, id: &IdeaId) -> Result<Idea, BoardError> {
        let updated = self.client.vote(id).await?;
        self.cache.apply(updated.clone());
        Ok(updated)
    }

    /// Periodic re-fetch loop approximating real-time updates. A failed
    /// refresh is logged and retried on the next tick; the board surfaces
    /// nothing to its user.
    pub async fn run(&mut self) {
        let mut ticker = tokio::time::interval(self.cache.staleness);
        loop {
            ticker.tick().await;
            if let Err(e) = self.refresh().await {
                tracing::warn!("Board refresh failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(id: i64, votes: i64) -> Idea {
        Idea {
            id: IdeaId::Int(id),
            title: format!("idea {}", id),
            description: "desc".to_string(),
            votes,
            tags: Vec::new(),
            author: "tester".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut draft = IdeaDraft::default();
        draft.toggle_tag("AI");
        draft.toggle_tag("Web Development");
        assert_eq!(draft.tags, vec!["AI", "Web Development"]);

        draft.toggle_tag("AI");
        assert_eq!(draft.tags, vec!["Web Development"]);
    }

    #[test]
    fn validate_rejects_empty_required_fields() {
        let draft = IdeaDraft {
            title: "  ".to_string(),
            description: "fine".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(BoardError::Validation(_))
        ));

        let draft = IdeaDraft {
            title: "fine".to_string(),
            description: String::new(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn apply_replaces_local_copy_with_server_record() {
        let mut cache = BoardCache::new(DEFAULT_REFRESH_INTERVAL);
        cache.replace(vec![idea(1, 0), idea(2, 3)]);

        // Server says idea 1 now has 5 votes; it must win and re-sort.
        cache.apply(idea(1, 5));

        let votes: Vec<i64> = cache.ideas().iter().map(|i| i.votes).collect();
        assert_eq!(votes, vec![5, 3]);
        assert_eq!(cache.ideas()[0].id, IdeaId::Int(1));
    }

    #[test]
    fn apply_appends_unseen_records() {
        let mut cache = BoardCache::new(DEFAULT_REFRESH_INTERVAL);
        cache.replace(vec![idea(1, 1)]);

        cache.apply(idea(2, 0));
        assert_eq!(cache.ideas().len(), 2);
        assert_eq!(cache.ideas()[1].id, IdeaId::Int(2));
    }

    #[tokio::test(start_paused = true)]
    async fn cache_goes_stale_after_the_window() {
        let mut cache = BoardCache::new(Duration::from_secs(5));
        assert!(cache.is_stale());

        cache.replace(Vec::new());
        assert!(!cache.is_stale());

        tokio::time::advance(Duration::from_secs(6)).await;
        assert!(cache.is_stale());
    }
}

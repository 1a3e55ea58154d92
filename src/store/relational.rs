//! SQLite adapter for the idea store.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::IdeaStore;
use crate::errors::AppError;
use crate::models::{Idea, IdeaId, NewIdea};

/// Idea store backed by a SQLite table with sequential integer ids.
///
/// Tags are stored as a JSON-encoded TEXT column, so tag values containing
/// commas or quotes round-trip unchanged.
#[derive(Clone)]
pub struct RelationalIdeaStore {
    pool: SqlitePool,
}

impl RelationalIdeaStore {
    /// Open the connection pool and create the schema.
    pub async fn connect(db_path: &Path) -> Result<Self, AppError> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let options = SqliteConnectOptions::from_str(&db_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.create_schema().await?;
        Ok(store)
    }

    async fn create_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ideas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                votes INTEGER NOT NULL DEFAULT 0,
                tags TEXT NOT NULL DEFAULT '[]',
                author TEXT NOT NULL DEFAULT '',
                image_url TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_ideas_votes ON ideas(votes)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl IdeaStore for RelationalIdeaStore {
    async fn bootstrap(&self) -> Result<(), AppError> {
        self.create_schema().await
    }

    async fn create(&self, idea: &NewIdea) -> Result<Idea, AppError> {
        let tags_json = serde_json::to_string(&idea.tags)?;

        let result = sqlx::query(
            "INSERT INTO ideas (title, description, votes, tags, author, image_url) VALUES (?, ?, 0, ?, ?, ?)",
        )
        .bind(&idea.title)
        .bind(&idea.description)
        .bind(&tags_json)
        .bind(&idea.author)
        .bind(&idea.image_url)
        .execute(&self.pool)
        .await?;

        Ok(Idea {
            id: IdeaId::Int(result.last_insert_rowid()),
            title: idea.title.clone(),
            description: idea.description.clone(),
            votes: 0,
            tags: idea.tags.clone(),
            author: idea.author.clone(),
            image_url: idea.image_url.clone(),
        })
    }

    async fn list(&self) -> Result<Vec<Idea>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, votes, tags, author, image_url FROM ideas ORDER BY votes DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(idea_from_row).collect())
    }

    async fn increment_vote(&self, id: &str) -> Result<Idea, AppError> {
        let row_id: i64 = id
            .parse()
            .map_err(|_| AppError::Persistence("idea not found".to_string()))?;

        // Single-statement increment; never read-then-write.
        let result = sqlx::query("UPDATE ideas SET votes = votes + 1 WHERE id = ?")
            .bind(row_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Persistence("idea not found".to_string()));
        }

        let row = sqlx::query(
            "SELECT id, title, description, votes, tags, author, image_url FROM ideas WHERE id = ?",
        )
        .bind(row_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(idea_from_row(&row))
    }
}

fn idea_from_row(row: &sqlx::sqlite::SqliteRow) -> Idea {
    let tags_str: String = row.get("tags");
    Idea {
        id: IdeaId::Int(row.get("id")),
        title: row.get("title"),
        description: row.get("description"),
        votes: row.get("votes"),
        tags: parse_json_array(&tags_str),
        author: row.get("author"),
        image_url: row.get("image_url"),
    }
}

fn parse_json_array(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}

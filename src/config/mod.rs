//! Configuration module for the idea-board backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Persistence backend selected at process start.
///
/// Call sites go through the `IdeaStore` port and never name a concrete
/// backend; this enum is consulted exactly once, in `store::init_store`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// SQLite table, sequential integer ids.
    Relational,
    /// Flat JSON document, timestamp-derived string ids.
    Document,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Relational => "relational",
            StoreBackend::Document => "document",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "relational" => Some(StoreBackend::Relational),
            "document" => Some(StoreBackend::Document),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which idea-store adapter to run
    pub store_backend: StoreBackend,
    /// Path to SQLite database file (relational adapter)
    pub db_path: PathBuf,
    /// Path to the JSON document file (document adapter)
    pub doc_path: PathBuf,
    /// Directory for uploaded images, served at /uploads
    pub upload_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let store_backend = env::var("IDEABOARD_STORE")
            .ok()
            .and_then(|s| StoreBackend::from_str(&s))
            .unwrap_or(StoreBackend::Relational);

        let db_path = env::var("IDEABOARD_DB_PATH")
            .unwrap_or_else(|_| "./data/ideas.sqlite".to_string())
            .into();

        let doc_path = env::var("IDEABOARD_DOC_PATH")
            .unwrap_or_else(|_| "./data/ideas.json".to_string())
            .into();

        let upload_dir = env::var("IDEABOARD_UPLOAD_DIR")
            .unwrap_or_else(|_| "./data/uploads".to_string())
            .into();

        let bind_addr = env::var("IDEABOARD_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid IDEABOARD_BIND_ADDR format");

        let log_level = env::var("IDEABOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            store_backend,
            db_path,
            doc_path,
            upload_dir,
            bind_addr,
            log_level,
        }
    }
}

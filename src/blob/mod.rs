//! Blob storage for uploaded images.
//!
//! Files land under a local directory that the router serves at `/uploads`;
//! the returned URL is what clients put into an idea's `image_url`.

use std::path::PathBuf;

use crate::errors::AppError;

/// Stores uploaded files under a local directory.
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Write `bytes` under a collision-free name and return the public URL.
    pub async fn put(&self, filename: &str, bytes: &[u8]) -> Result<String, AppError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let stored_name = format!("{}-{}", uuid::Uuid::new_v4(), sanitize(filename));
        tokio::fs::write(self.root.join(&stored_name), bytes).await?;

        Ok(format!("/uploads/{}", stored_name))
    }
}

/// Strip path separators and anything else suspicious from a client-supplied
/// name; the UUID prefix already guarantees uniqueness.
fn sanitize(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize("cat photo.png"), "catphoto.png");
        assert_eq!(sanitize("///"), "upload");
    }

    #[tokio::test]
    async fn put_writes_file_and_returns_uploads_url() {
        let dir = TempDir::new().unwrap();
        let blobs = BlobStore::new(dir.path().to_path_buf());

        let url = blobs.put("pic.png", b"fake image bytes").await.unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with("-pic.png"));

        let stored_name = url.strip_prefix("/uploads/").unwrap();
        let on_disk = tokio::fs::read(dir.path().join(stored_name)).await.unwrap();
        assert_eq!(on_disk, b"fake image bytes");
    }
}

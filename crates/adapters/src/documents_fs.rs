//! Filesystem-based document source

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use topic_finder_domain::{DocumentError, DocumentSource};

/// Serves the regular files directly inside one directory
pub struct FsDocumentSource {
    documents_dir: PathBuf,
}

impl FsDocumentSource {
    pub fn new(documents_dir: impl AsRef<Path>) -> Self {
        Self {
            documents_dir: documents_dir.as_ref().to_path_buf(),
        }
    }

    fn listing_error(&self, source: std::io::Error) -> DocumentError {
        DocumentError::DirectoryUnreadable {
            path: self.documents_dir.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl DocumentSource for FsDocumentSource {
    /// Regular files only (symlinks are followed), no recursion, sorted by path
    async fn list(&self) -> Result<Vec<PathBuf>, DocumentError> {
        let mut entries = tokio::fs::read_dir(&self.documents_dir)
            .await
            .map_err(|e| self.listing_error(e))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| self.listing_error(e))?
        {
            let path = entry.path();
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                }
            }
        }

        paths.sort();

        tracing::debug!(
            dir = %self.documents_dir.display(),
            count = paths.len(),
            "Listed documents"
        );

        Ok(paths)
    }

    async fn read(&self, path: &Path) -> Result<String, DocumentError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| DocumentError::Unreadable {
                path: path.display().to_string(),
                source,
            })?;

        String::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8 {
            path: path.display().to_string(),
        })
    }
}

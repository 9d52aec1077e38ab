//! Filesystem-based topics repository

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use topic_finder_domain::{TopicSet, TopicsError, TopicsRepo, parse_topics};

/// Loads topics from a `name:keyword,keyword` text file
pub struct FsTopicsRepo {
    topic_file: PathBuf,
}

impl FsTopicsRepo {
    pub fn new(topic_file: impl AsRef<Path>) -> Self {
        Self {
            topic_file: topic_file.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl TopicsRepo for FsTopicsRepo {
    async fn load(&self) -> Result<TopicSet, TopicsError> {
        let content = tokio::fs::read_to_string(&self.topic_file)
            .await
            .map_err(|source| TopicsError::Unreadable {
                path: self.topic_file.display().to_string(),
                source,
            })?;

        let topics = parse_topics(&content)?;

        tracing::debug!(
            path = %self.topic_file.display(),
            count = topics.len(),
            "Parsed topic file"
        );

        Ok(topics)
    }
}

//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::TopicSet;
use crate::parser::LineError;

/// Error type for topic loading. Always fatal to a run.
#[derive(Debug, Error)]
pub enum TopicsError {
    #[error("Failed to read topic file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed topic line {line_number} '{line}': {reason}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: LineError,
    },
}

/// Port for loading the topic definitions
#[async_trait]
pub trait TopicsRepo: Send + Sync {
    /// Load and parse every topic. No partial set is ever returned.
    async fn load(&self) -> Result<TopicSet, TopicsError>;
}

/// Error type for document source operations
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to list documents in {path}: {source}")]
    DirectoryUnreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to read document {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("Document {path} is not valid UTF-8")]
    NotUtf8 { path: String },
}

/// Port for enumerating and reading documents
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// List document paths in deterministic (sorted) order
    async fn list(&self) -> Result<Vec<PathBuf>, DocumentError>;

    /// Read the full text of one document
    async fn read(&self, path: &Path) -> Result<String, DocumentError>;
}

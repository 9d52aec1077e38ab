//! Find use case - loads topics, enumerates documents and matches them

use std::sync::Arc;
use thiserror::Error;

use crate::{
    model::{MatchReport, TopicSet},
    ports::{DocumentError, DocumentSource, TopicsError, TopicsRepo},
    usecases::match_topics::{DocumentFailure, MatchConfig, Matcher},
};

/// Fatal errors that abort a run before any matching happens
#[derive(Debug, Error)]
pub enum FindError {
    #[error("Could not retrieve topics: {0}")]
    Topics(#[from] TopicsError),
    #[error("Could not enumerate documents: {0}")]
    Documents(#[from] DocumentError),
}

/// Everything produced by a single run
#[derive(Debug)]
pub struct FindResult {
    pub topics: TopicSet,
    pub report: MatchReport,
    pub failures: Vec<DocumentFailure>,
}

/// Orchestrates one topic-finding run
pub struct FindUseCase<T, D>
where
    T: TopicsRepo + ?Sized,
    D: DocumentSource + ?Sized,
{
    topics_repo: Arc<T>,
    documents: Arc<D>,
    config: MatchConfig,
}

impl<T, D> FindUseCase<T, D>
where
    T: TopicsRepo + ?Sized,
    D: DocumentSource + ?Sized,
{
    pub fn new(topics_repo: Arc<T>, documents: Arc<D>, config: MatchConfig) -> Self {
        Self {
            topics_repo,
            documents,
            config,
        }
    }

    /// Run the whole pipeline. Topic and listing failures are fatal;
    /// unreadable documents are reported in [`FindResult::failures`].
    pub async fn run(&self) -> Result<FindResult, FindError> {
        let topics = self.topics_repo.load().await?;
        tracing::info!(topics = topics.len(), "Loaded topics");

        let paths = self.documents.list().await?;
        tracing::info!(documents = paths.len(), "Listed documents");

        let matcher = Matcher::new(self.documents.as_ref(), self.config.clone());
        let outcome = matcher.run(&topics, &paths).await;

        Ok(FindResult {
            topics,
            report: outcome.report,
            failures: outcome.failures,
        })
    }
}

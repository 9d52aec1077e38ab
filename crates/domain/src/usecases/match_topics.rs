//! Matching use case - finds which topics appear in each document

use std::path::{Path, PathBuf};

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::{
    model::{MatchReport, TopicId, TopicSet},
    ports::{DocumentError, DocumentSource},
};

/// Configuration for the matcher
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Maximum documents read at once (1 = strictly sequential)
    pub max_concurrent: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_concurrent: 4 }
    }
}

/// A document that could not be matched
#[derive(Debug)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub error: DocumentError,
}

/// Result of a matching pass
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// Matches keyed by document base name, in input order
    pub report: MatchReport,
    /// Documents skipped because they could not be read
    pub failures: Vec<DocumentFailure>,
}

/// Topics whose keywords occur in `lowered`, in topic-set order.
///
/// `lowered` must already be lowercased.
pub fn match_content(topics: &TopicSet, lowered: &str) -> Vec<TopicId> {
    topics
        .iter()
        .filter(|(_, topic)| topic.is_in_content(lowered))
        .map(|(id, _)| id)
        .collect()
}

/// Base file name used as the report key
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

type DocumentResult = (usize, Result<Vec<TopicId>, DocumentError>);

/// Use case for matching a topic set against documents
pub struct Matcher<'a, S: DocumentSource + ?Sized> {
    source: &'a S,
    config: MatchConfig,
}

impl<'a, S: DocumentSource + ?Sized> Matcher<'a, S> {
    pub fn new(source: &'a S, config: MatchConfig) -> Self {
        Self { source, config }
    }

    /// Match every document in `paths` against `topics`.
    ///
    /// Documents are read with bounded concurrency but the report keeps the
    /// order of `paths`. Unreadable documents are left out of the report and
    /// listed in the outcome's failures.
    pub async fn run(&self, topics: &TopicSet, paths: &[PathBuf]) -> MatchOutcome {
        let max_concurrent = self.config.max_concurrent.max(1);
        let mut results: Vec<DocumentResult> = Vec::with_capacity(paths.len());
        let mut tasks: FuturesUnordered<BoxFuture<'_, DocumentResult>> = FuturesUnordered::new();
        let mut pending = paths.iter().enumerate();

        while tasks.len() < max_concurrent {
            let Some((index, path)) = pending.next() else {
                break;
            };
            tasks.push(self.document_task(topics, index, path));
        }

        while let Some(result) = tasks.next().await {
            results.push(result);
            while tasks.len() < max_concurrent {
                let Some((index, path)) = pending.next() else {
                    break;
                };
                tasks.push(self.document_task(topics, index, path));
            }
        }

        // Completion order is arbitrary; restore input order
        results.sort_by_key(|(index, _)| *index);

        let mut outcome = MatchOutcome::default();
        for (index, result) in results {
            let path = &paths[index];
            match result {
                Ok(matched) => {
                    let name = document_name(path);
                    tracing::debug!(
                        document = %name,
                        matched = matched.len(),
                        "Matched document"
                    );
                    if outcome.report.insert(name.clone(), matched).is_some() {
                        tracing::warn!(
                            document = %name,
                            path = %path.display(),
                            "Duplicate document name, earlier result replaced"
                        );
                    }
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), error = %error, "Skipping document");
                    outcome.failures.push(DocumentFailure {
                        path: path.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            documents = outcome.report.len(),
            failures = outcome.failures.len(),
            topics = topics.len(),
            "Matching complete"
        );

        outcome
    }

    fn document_task<'t>(
        &'t self,
        topics: &'t TopicSet,
        index: usize,
        path: &'t Path,
    ) -> BoxFuture<'t, DocumentResult> {
        Box::pin(async move {
            let result = self
                .source
                .read(path)
                .await
                .map(|content| match_content(topics, &content.to_lowercase()));
            (index, result)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topic;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Serves documents from memory, with a per-document delay so that
    /// completion order differs from input order.
    struct FakeSource {
        documents: HashMap<PathBuf, (String, u64)>,
    }

    impl FakeSource {
        fn new(documents: &[(&str, &str, u64)]) -> Self {
            Self {
                documents: documents
                    .iter()
                    .map(|(path, text, delay)| {
                        (PathBuf::from(path), (text.to_string(), *delay))
                    })
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl DocumentSource for FakeSource {
        async fn list(&self) -> Result<Vec<PathBuf>, DocumentError> {
            let mut paths: Vec<_> = self.documents.keys().cloned().collect();
            paths.sort();
            Ok(paths)
        }

        async fn read(&self, path: &Path) -> Result<String, DocumentError> {
            let (text, delay) = self.documents.get(path).ok_or_else(|| {
                DocumentError::Unreadable {
                    path: path.display().to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                }
            })?;
            tokio::time::sleep(Duration::from_millis(*delay)).await;
            Ok(text.clone())
        }
    }

    fn sample_topics() -> TopicSet {
        TopicSet::new(vec![
            Topic::new("Faith", ["faith", "believe", "trust"]).unwrap(),
            Topic::new("Jesus", ["savior", "christ", "charity", "bread of life"]).unwrap(),
            Topic::new("Happiness", ["happy", "joy", "rejoice"]).unwrap(),
        ])
    }

    #[test]
    fn test_match_content_keeps_topic_order() {
        let topics = sample_topics();
        let matched = match_content(&topics, "rejoice, for christ asks you to believe");
        assert_eq!(topics.names(&matched), vec!["Faith", "Jesus", "Happiness"]);
    }

    #[test]
    fn test_match_content_phrase_must_be_exact() {
        let topics = sample_topics();
        let lowered = "The Bread of Water is not the source of all happiness.".to_lowercase();
        assert!(match_content(&topics, &lowered).is_empty());

        let matched = match_content(&topics, "happy is he that eats the bread of life");
        assert_eq!(topics.names(&matched), vec!["Jesus", "Happiness"]);
    }

    #[test]
    fn test_document_name_strips_directories() {
        assert_eq!(document_name(Path::new("/tmp/docs/ch01.txt")), "ch01.txt");
        assert_eq!(document_name(Path::new("ch02.txt")), "ch02.txt");
    }

    #[tokio::test]
    async fn test_run_preserves_input_order_and_lowercases_content() {
        let source = FakeSource::new(&[
            ("/docs/ch01.txt", "FAITH comes by hearing", 30),
            ("/docs/ch02.txt", "nothing to see", 0),
            ("/docs/ch03.txt", "I am the Bread of Life", 10),
        ]);
        let topics = sample_topics();
        let paths = source.list().await.unwrap();

        let matcher = Matcher::new(&source, MatchConfig { max_concurrent: 3 });
        let outcome = matcher.run(&topics, &paths).await;

        let faith = topics.find_by_name("Faith").unwrap();
        let jesus = topics.find_by_name("Jesus").unwrap();

        assert!(outcome.failures.is_empty());
        assert_eq!(
            outcome.report.documents(),
            vec!["ch01.txt", "ch02.txt", "ch03.txt"]
        );
        assert!(outcome.report.contains("ch01.txt", faith));
        assert_eq!(outcome.report.get("ch02.txt"), Some(&[][..]));
        assert!(outcome.report.contains("ch03.txt", jesus));
        assert!(!outcome.report.contains("ch03.txt", faith));
    }

    #[tokio::test]
    async fn test_run_skips_unreadable_documents() {
        let source = FakeSource::new(&[("/docs/a.txt", "joy", 0), ("/docs/c.txt", "trust", 0)]);
        let topics = sample_topics();
        let paths = vec![
            PathBuf::from("/docs/a.txt"),
            PathBuf::from("/docs/b.txt"),
            PathBuf::from("/docs/c.txt"),
        ];

        let matcher = Matcher::new(&source, MatchConfig { max_concurrent: 1 });
        let outcome = matcher.run(&topics, &paths).await;

        assert_eq!(outcome.report.documents(), vec!["a.txt", "c.txt"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].path, PathBuf::from("/docs/b.txt"));
        assert!(matches!(
            outcome.failures[0].error,
            DocumentError::Unreadable { .. }
        ));
    }

    #[tokio::test]
    async fn test_run_later_duplicate_name_wins() {
        let source = FakeSource::new(&[
            ("/one/same.txt", "faith", 0),
            ("/one/other.txt", "", 0),
            ("/two/same.txt", "joy", 0),
        ]);
        let topics = sample_topics();
        let paths = vec![
            PathBuf::from("/one/same.txt"),
            PathBuf::from("/one/other.txt"),
            PathBuf::from("/two/same.txt"),
        ];

        let outcome = Matcher::new(&source, MatchConfig::default())
            .run(&topics, &paths)
            .await;

        let happiness = topics.find_by_name("Happiness").unwrap();
        assert_eq!(outcome.report.documents(), vec!["same.txt", "other.txt"]);
        assert_eq!(outcome.report.get("same.txt"), Some(&[happiness][..]));
    }

    #[tokio::test]
    async fn test_run_with_no_documents() {
        let source = FakeSource::new(&[]);
        let outcome = Matcher::new(&source, MatchConfig::default())
            .run(&sample_topics(), &[])
            .await;

        assert!(outcome.report.is_empty());
        assert!(outcome.failures.is_empty());
    }
}

//! Domain models and value objects

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing a [`Topic`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Topic '{name}' has no keywords")]
    NoKeywords { name: String },
}

/// A named category defined by a list of keyword phrases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Topic name, case preserved from the definition
    name: String,
    /// Lowercased keyword phrases, in definition order
    keywords: Vec<String>,
}

impl Topic {
    /// Create a topic. Keywords are lowercased individually but otherwise
    /// kept as given: no trimming, no deduplication.
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Result<Self, TopicError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(TopicError::InvalidArgument("topic name cannot be empty"));
        }

        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();

        if keywords.is_empty() {
            return Err(TopicError::NoKeywords { name });
        }

        Ok(Self { name, keywords })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Exact match against the stored (lowercased) keywords.
    /// Callers lowercase their argument for case-insensitive lookups.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// True if any keyword occurs as a contiguous substring of `content`.
    ///
    /// This is literal containment, not word matching: the keyword
    /// `"bread of life"` needs that exact phrase, spaces included.
    pub fn is_in_content(&self, content: &str) -> bool {
        self.keywords.iter().any(|k| content.contains(k.as_str()))
    }

    /// True if any of `candidates` equals one of the stored keywords
    pub fn contains_any_keyword<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .any(|candidate| self.has_keyword(candidate.as_ref()))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}, keywords: {:?}", self.name, self.keywords)
    }
}

/// Handle to a topic inside the [`TopicSet`] it came from.
///
/// Match results refer to topics through this handle, so two topics with
/// identical names and keywords are still distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TopicId(usize);

/// Ordered, immutable collection of topics for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopicSet {
    topics: Vec<Topic>,
}

impl TopicSet {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// Get a topic by handle
    pub fn get(&self, id: TopicId) -> Option<&Topic> {
        self.topics.get(id.0)
    }

    /// Handle of the first topic with the given name
    pub fn find_by_name(&self, name: &str) -> Option<TopicId> {
        self.topics.iter().position(|t| t.name == name).map(TopicId)
    }

    /// Iterate topics in definition order
    pub fn iter(&self) -> impl Iterator<Item = (TopicId, &Topic)> {
        self.topics.iter().enumerate().map(|(i, t)| (TopicId(i), t))
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Resolve handles to topic names, skipping handles from another set
    pub fn names(&self, ids: &[TopicId]) -> Vec<&str> {
        ids.iter()
            .filter_map(|id| self.get(*id))
            .map(Topic::name)
            .collect()
    }
}

/// Topics matched by one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMatches {
    /// Document base name
    pub document: String,
    /// Matched topics, in topic-set order
    pub topics: Vec<TopicId>,
}

/// Insertion-ordered mapping of document name to matched topics
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    entries: Vec<DocumentMatches>,
    positions: HashMap<String, usize>,
}

impl MatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the matches for a document.
    ///
    /// A document already present keeps its position; its topic list is
    /// replaced and the previous one returned.
    pub fn insert(
        &mut self,
        document: impl Into<String>,
        topics: Vec<TopicId>,
    ) -> Option<Vec<TopicId>> {
        let document = document.into();
        if let Some(&pos) = self.positions.get(&document) {
            return Some(std::mem::replace(&mut self.entries[pos].topics, topics));
        }

        self.positions.insert(document.clone(), self.entries.len());
        self.entries.push(DocumentMatches { document, topics });
        None
    }

    /// Matched topics for a document
    pub fn get(&self, document: &str) -> Option<&[TopicId]> {
        self.positions
            .get(document)
            .map(|&pos| self.entries[pos].topics.as_slice())
    }

    /// Whether `document` matched the topic behind `id`
    pub fn contains(&self, document: &str, id: TopicId) -> bool {
        self.get(document).is_some_and(|topics| topics.contains(&id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentMatches> {
        self.entries.iter()
    }

    pub fn documents(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.document.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn jesus() -> Topic {
        Topic::new("Jesus", ["Savior", "Christ", "Charity"]).unwrap()
    }

    #[test]
    fn test_new_lowercases_keywords_but_not_name() {
        let topic = Topic::new("Faith", ["Faith", "TRUST"]).unwrap();
        assert_eq!(topic.name(), "Faith");
        assert_eq!(topic.keywords(), ["faith", "trust"]);
    }

    #[test]
    fn test_new_keeps_duplicates_and_whitespace() {
        let topic = Topic::new("Faith", ["faith", " faith", "faith"]).unwrap();
        assert_eq!(topic.keywords(), ["faith", " faith", "faith"]);
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let result = Topic::new("", ["faith"]);
        assert!(matches!(result, Err(TopicError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_rejects_empty_keywords() {
        let result = Topic::new("Faith", Vec::<String>::new());
        assert!(matches!(result, Err(TopicError::NoKeywords { .. })));
    }

    #[test]
    fn test_has_keyword_is_case_sensitive_on_stored_value() {
        let topic = jesus();
        assert!(topic.has_keyword("christ"));
        assert!(!topic.has_keyword("Christ"));
        assert!(!topic.has_keyword("satan"));
    }

    #[test]
    fn test_contains_any_keyword() {
        let topic = jesus();
        let hit: HashSet<String> = ["savior", "blasphemer", "pharisee"]
            .into_iter()
            .map(String::from)
            .collect();
        let miss: HashSet<String> = ["judas", "blasphemer", "pharisee"]
            .into_iter()
            .map(String::from)
            .collect();

        assert!(topic.contains_any_keyword(&hit));
        assert!(!topic.contains_any_keyword(&miss));
        assert!(!topic.contains_any_keyword(&HashSet::<String>::new()));

        // Candidates are compared as given, not lowercased
        let mixed_case: HashSet<String> = ["Savior"].into_iter().map(String::from).collect();
        assert!(!topic.contains_any_keyword(&mixed_case));
    }

    #[test]
    fn test_is_in_content_uses_phrase_substrings() {
        let topic = Topic::new("Jesus", ["savior", "christ", "charity", "bread of life"]).unwrap();

        let miss = "The Bread of Water is not the source of all happiness.".to_lowercase();
        assert!(!topic.is_in_content(&miss));

        let hit = "i am the bread of life".to_string();
        assert!(topic.is_in_content(&hit));

        // Substring, not word, containment
        assert!(topic.is_in_content("antichristian"));
    }

    #[test]
    fn test_is_in_content_does_not_lowercase_content() {
        let topic = jesus();
        assert!(!topic.is_in_content("CHRIST"));
    }

    #[test]
    fn test_display() {
        let topic = Topic::new("Hope", ["hope"]).unwrap();
        assert_eq!(topic.to_string(), r#"name: Hope, keywords: ["hope"]"#);
    }

    #[test]
    fn test_topic_set_identity_is_positional() {
        let set = TopicSet::new(vec![
            Topic::new("Faith", ["faith"]).unwrap(),
            Topic::new("Faith", ["faith"]).unwrap(),
        ]);
        let ids: Vec<_> = set.iter().map(|(id, _)| id).collect();

        assert_ne!(ids[0], ids[1]);
        assert_eq!(set.find_by_name("Faith"), Some(ids[0]));
        assert_eq!(set.names(&ids), vec!["Faith", "Faith"]);
    }

    #[test]
    fn test_report_replaces_in_place() {
        let set = TopicSet::new(vec![
            Topic::new("A", ["a"]).unwrap(),
            Topic::new("B", ["b"]).unwrap(),
        ]);
        let a = set.find_by_name("A").unwrap();
        let b = set.find_by_name("B").unwrap();

        let mut report = MatchReport::new();
        assert!(report.insert("one.txt", vec![a]).is_none());
        assert!(report.insert("two.txt", vec![]).is_none());
        assert_eq!(report.insert("one.txt", vec![b]), Some(vec![a]));

        assert_eq!(report.documents(), vec!["one.txt", "two.txt"]);
        assert!(report.contains("one.txt", b));
        assert!(!report.contains("one.txt", a));
        assert!(!report.contains("missing.txt", a));
        assert_eq!(report.len(), 2);
    }
}

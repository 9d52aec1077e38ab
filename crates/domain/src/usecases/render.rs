//! Rendering use case - turns a match report into console or JSON output

use serde::Serialize;

use crate::{
    model::{MatchReport, TopicSet},
    usecases::match_topics::DocumentFailure,
};

/// JSON shape of a rendered report
#[derive(Debug, Serialize)]
pub struct RenderedReport<'a> {
    pub topic_count: usize,
    pub documents: Vec<RenderedDocument<'a>>,
    pub failures: Vec<RenderedFailure>,
}

#[derive(Debug, Serialize)]
pub struct RenderedDocument<'a> {
    pub document: &'a str,
    pub topics: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct RenderedFailure {
    pub path: String,
    pub error: String,
}

/// Renderer for match reports
pub struct Renderer<'a> {
    topics: &'a TopicSet,
}

impl<'a> Renderer<'a> {
    pub fn new(topics: &'a TopicSet) -> Self {
        Self { topics }
    }

    /// One line per document: `"<document> <Topic1,Topic2>"`.
    ///
    /// A document with no topics still gets its line, ending in a space.
    pub fn render_text(&self, report: &MatchReport) -> String {
        report
            .iter()
            .map(|entry| {
                format!(
                    "{} {}\n",
                    entry.document,
                    self.topics.names(&entry.topics).join(",")
                )
            })
            .collect()
    }

    /// Structured form of the report, suitable for serialization
    pub fn render_report(
        &self,
        report: &'a MatchReport,
        failures: &[DocumentFailure],
    ) -> RenderedReport<'a> {
        RenderedReport {
            topic_count: self.topics.len(),
            documents: report
                .iter()
                .map(|entry| RenderedDocument {
                    document: &entry.document,
                    topics: self.topics.names(&entry.topics),
                })
                .collect(),
            failures: failures
                .iter()
                .map(|f| RenderedFailure {
                    path: f.path.display().to_string(),
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON of [`Renderer::render_report`]
    pub fn render_json(
        &self,
        report: &'a MatchReport,
        failures: &[DocumentFailure],
    ) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.render_report(report, failures))
    }
}

//! Topic file parsing
//!
//! A topic file holds one topic per line in the form
//! `name:keyword,keyword,...`. There is no escaping, so names cannot contain
//! `:` and keywords cannot contain `,` or `:`.

use thiserror::Error;

use crate::model::{Topic, TopicError, TopicSet};
use crate::ports::TopicsError;

/// Why a single topic line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected <name>:<keywords>")]
    MissingDelimiter,
    #[error(transparent)]
    Topic(#[from] TopicError),
}

/// Parse one `name:keywords` line.
///
/// The line is split on every `:`; only the first two fields are used and
/// anything after a second colon is dropped. Empty trailing fields do not
/// count, so `"Faith:"` is rejected. Keywords are lowercased but not trimmed.
pub fn parse_topic_line(line: &str) -> Result<Topic, LineError> {
    let fields = split_fields(line, ':');
    if fields.len() < 2 {
        return Err(LineError::MissingDelimiter);
    }

    if fields.len() > 2 {
        tracing::warn!(
            line = %line,
            dropped = %fields[2..].join(":"),
            "Topic line has more than one ':', extra fields ignored"
        );
    }

    let name = fields[0];
    // An empty keyword is a substring of everything
    let keywords = fields[1].split(',').filter(|k| !k.is_empty());

    Ok(Topic::new(name, keywords)?)
}

/// Parse a whole topic file. Any bad line fails the entire parse.
pub fn parse_topics(content: &str) -> Result<TopicSet, TopicsError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let topics = content
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse_topic_line(line).map_err(|reason| TopicsError::MalformedLine {
                line_number: index + 1,
                line: line.to_string(),
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if topics.is_empty() {
        tracing::warn!("Topic file contains no topics");
    }

    Ok(TopicSet::new(topics))
}

/// Split on `sep`, discarding empty trailing fields
fn split_fields(s: &str, sep: char) -> Vec<&str> {
    let mut fields: Vec<&str> = s.split(sep).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

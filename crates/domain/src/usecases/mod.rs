//! Application use cases / business logic

pub mod find;
pub mod match_topics;
pub mod render;

pub use find::{FindError, FindResult, FindUseCase};
pub use match_topics::{
    DocumentFailure, MatchConfig, MatchOutcome, Matcher, document_name, match_content,
};
pub use render::{RenderedReport, Renderer};

//! topic-finder domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Topics, topic sets and match reports
//! - `parser`: Topic file parsing
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: Matching, the end-to-end run and rendering

pub mod model;
pub mod parser;
pub mod ports;
pub mod usecases;

pub use model::*;
pub use parser::{LineError, parse_topic_line, parse_topics};
pub use ports::*;

//! topic-finder adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `topics`: Topic file loader
//! - `documents`: Directory-backed document source

mod documents_fs;
mod topics_fs;

/// Re-exports for topic adapters
pub mod topics {
    pub use crate::topics_fs::FsTopicsRepo as FilesystemTopicsRepo;
}

/// Re-exports for document adapters
pub mod documents {
    pub use crate::documents_fs::FsDocumentSource as FilesystemDocumentSource;
}

//! Run command - match a directory of documents against the topics

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use topic_finder_adapters::{
    documents::FilesystemDocumentSource, topics::FilesystemTopicsRepo,
};
use topic_finder_domain::usecases::{FindUseCase, MatchConfig, Renderer};

use super::usage_error;
use crate::args::RunArgs;
use crate::config::AppConfig;

pub async fn execute(args: RunArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = args.properties.clone().or(config_path);
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => usage_error(ErrorKind::InvalidValue, format!("{:#}", e)),
    };

    let Some(topic_file) = args.topic_file.clone().or(config.topic_file) else {
        usage_error(
            ErrorKind::MissingRequiredArgument,
            "no topic file configured (set topicFile/topic_file or pass --topic-file)",
        );
    };
    let Some(documents_dir) = args.documents_dir.clone().or(config.documents_dir) else {
        usage_error(
            ErrorKind::MissingRequiredArgument,
            "no documents directory configured (set gospelFilesDirectory/documents_dir or pass --documents-dir)",
        );
    };
    let max_concurrent = args.max_concurrent.unwrap_or(config.max_concurrent);

    tracing::info!(
        topic_file = %topic_file.display(),
        documents_dir = %documents_dir.display(),
        max_concurrent = max_concurrent,
        "Starting topic-finder run"
    );

    let usecase = FindUseCase::new(
        Arc::new(FilesystemTopicsRepo::new(&topic_file)),
        Arc::new(FilesystemDocumentSource::new(&documents_dir)),
        MatchConfig { max_concurrent },
    );

    let result = usecase.run().await.context("Could not run finder")?;

    if !result.failures.is_empty() {
        tracing::warn!(
            count = result.failures.len(),
            "Some documents could not be read and were left out"
        );
    }

    let renderer = Renderer::new(&result.topics);
    if args.json {
        let json = renderer
            .render_json(&result.report, &result.failures)
            .context("Failed to serialize results")?;
        println!("{}", json);
    } else {
        print!("{}", renderer.render_text(&result.report));
    }

    Ok(())
}

//! Topics command - list and validate topic definitions

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use std::path::PathBuf;
use topic_finder_adapters::topics::FilesystemTopicsRepo;
use topic_finder_domain::TopicsRepo;

use super::usage_error;
use crate::args::{TopicsArgs, TopicsCommands};
use crate::config::AppConfig;

pub async fn execute(args: TopicsArgs, config_path: Option<PathBuf>) -> Result<()> {
    match args.command {
        TopicsCommands::List { topic_file, json } => {
            list_topics(topic_file, json, config_path).await
        }
        TopicsCommands::Validate { topic_file } => validate_topics(topic_file, config_path).await,
    }
}

fn resolve_topic_file(topic_file: Option<PathBuf>, config_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = topic_file {
        return path;
    }

    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => usage_error(ErrorKind::InvalidValue, format!("{:#}", e)),
    };
    match config.topic_file {
        Some(path) => path,
        None => usage_error(
            ErrorKind::MissingRequiredArgument,
            "no topic file configured (set topicFile/topic_file or pass --topic-file)",
        ),
    }
}

async fn list_topics(
    topic_file: Option<PathBuf>,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let path = resolve_topic_file(topic_file, config_path);
    let repo = FilesystemTopicsRepo::new(&path);

    let topics = repo.load().await.context("Failed to load topics")?;

    if json {
        let output = serde_json::json!({
            "count": topics.len(),
            "topics": topics.topics(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Topics ({} found)", topics.len());
        println!("=================");
        println!();

        for topic in topics.topics() {
            println!("{}", topic.name());
            println!("  Keywords: {}", topic.keywords().join(", "));
        }
    }

    Ok(())
}

async fn validate_topics(topic_file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_topic_file(topic_file, config_path);

    println!("Validating topics in: {}", path.display());

    let repo = FilesystemTopicsRepo::new(&path);

    match repo.load().await {
        Ok(topics) => {
            println!("✓ Validation passed ({} topics)", topics.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

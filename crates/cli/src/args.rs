//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// topic-finder: report which keyword-defined topics appear in each document of a directory
#[derive(Parser, Debug)]
#[command(name = "topic-finder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (.toml, .json or Java .properties)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match every document against the topics and print the results
    Run(RunArgs),

    /// Inspect topic definitions
    Topics(TopicsArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Properties file naming `topicFile` and `gospelFilesDirectory` (takes precedence over --config)
    pub properties: Option<PathBuf>,

    /// Override topic file
    #[arg(long)]
    pub topic_file: Option<PathBuf>,

    /// Override documents directory
    #[arg(long)]
    pub documents_dir: Option<PathBuf>,

    /// Maximum documents read concurrently
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TopicsArgs {
    #[command(subcommand)]
    pub command: TopicsCommands,
}

#[derive(Subcommand, Debug)]
pub enum TopicsCommands {
    /// List all parsed topics
    List {
        /// Override topic file
        #[arg(long)]
        topic_file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the topic file
    Validate {
        /// Override topic file
        #[arg(long)]
        topic_file: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./topic-finder.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

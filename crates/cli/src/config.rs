//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_PATH: &str = "./topic-finder.toml";

/// Top-level configuration.
///
/// Keys are flat so that a Java-style properties file
/// (`topicFile=...`, `gospelFilesDirectory=...`) maps onto it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(
        default,
        alias = "topicFile",
        alias = "topicfile",
        skip_serializing_if = "Option::is_none"
    )]
    pub topic_file: Option<PathBuf>,

    #[serde(
        default,
        alias = "gospelFilesDirectory",
        alias = "gospelfilesdirectory",
        skip_serializing_if = "Option::is_none"
    )]
    pub documents_dir: Option<PathBuf>,

    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_max_concurrent() -> usize {
    4
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            topic_file: None,
            documents_dir: None,
            max_concurrent: default_max_concurrent(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            if is_properties_file(path) {
                builder = builder.add_source(PropertiesFile::new(path));
            } else {
                builder = builder.add_source(config::File::from(path));
            }
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("TOPIC_FINDER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> Result<String> {
        let example = Self {
            topic_file: Some(PathBuf::from("./topics.txt")),
            documents_dir: Some(PathBuf::from("./documents")),
            max_concurrent: default_max_concurrent(),
        };
        let body =
            toml::to_string_pretty(&example).context("Failed to render example configuration")?;

        Ok(format!(
            "# topic-finder configuration\n\
             #\n\
             # topic_file: one topic per line, <name>:<keyword>,<keyword>,...\n\
             # documents_dir: every regular file directly inside is matched\n\
             # max_concurrent: documents read at once (1 = sequential)\n\n\
             {body}"
        ))
    }
}

fn is_properties_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("properties"))
}

/// Java `.properties` file as a `config` source
#[derive(Debug, Clone)]
struct PropertiesFile {
    path: PathBuf,
}

impl PropertiesFile {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl config::Source for PropertiesFile {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        let origin = self.path.display().to_string();
        let file = File::open(&self.path).map_err(|e| {
            config::ConfigError::Message(format!("Failed to open {}: {}", origin, e))
        })?;
        let properties = java_properties::read(BufReader::new(file)).map_err(|e| {
            config::ConfigError::Message(format!("Failed to parse {}: {}", origin, e))
        })?;

        Ok(properties
            .into_iter()
            .map(|(key, value)| (key, config::Value::new(Some(&origin), value)))
            .collect())
    }
}

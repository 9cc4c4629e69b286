//! Configuration management for mdindex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Index credentials have no defaults; they are only checked when an
//! upload is requested.

use crate::core::error::{MdIndexError, Result};
use crate::core::indexer::{EmptyChunkPolicy, DEFAULT_KEY_WORDS};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub index: IndexConfig,
}

/// Document source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Directory holding the site's markdown pages
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Document chunked when none is given on the command line
    #[serde(default)]
    pub document: Option<String>,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Words kept in each record key
    #[serde(default = "default_key_words")]
    pub key_words: usize,

    /// Whether blank chunks become records
    #[serde(default)]
    pub empty_chunks: EmptyChunkPolicy,
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where the record list is written
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Indent with two spaces (false writes minified JSON)
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Remote search index configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Base URL of the index service
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub application_id: Option<String>,

    /// Write API key (never logged)
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub index_name: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,

    /// Whole-batch retries on transient failures (0 = fail fast)
    #[serde(default)]
    pub max_retries: usize,
}

// Default value functions
fn default_docs_dir() -> PathBuf {
    PathBuf::from("src/app/docs")
}

fn default_key_words() -> usize {
    DEFAULT_KEY_WORDS
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.json")
}

fn default_pretty() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            document: None,
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            key_words: default_key_words(),
            empty_chunks: EmptyChunkPolicy::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: default_pretty(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            application_id: None,
            api_key: None,
            index_name: None,
            timeout_sec: default_timeout(),
            max_retries: 0,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MdIndexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File lookup order:
    /// 1. MDINDEX_CONFIG env var
    /// 2. XDG config file (~/.config/mdindex/config.toml)
    /// 3. ./mdindex.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("MDINDEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("mdindex.toml").exists() {
                Self::from_file("mdindex.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Source configuration
        if let Ok(dir) = env::var("MDINDEX_DOCS_DIR") {
            self.source.docs_dir = PathBuf::from(dir);
        }
        if let Ok(document) = env::var("MDINDEX_DOCUMENT") {
            self.source.document = Some(document);
        }

        // Chunking configuration
        if let Ok(key_words) = env::var("MDINDEX_KEY_WORDS") {
            if let Ok(n) = key_words.parse() {
                self.chunking.key_words = n;
            }
        }
        if let Ok(policy) = env::var("MDINDEX_EMPTY_CHUNKS") {
            match policy.to_ascii_lowercase().as_str() {
                "keep" => self.chunking.empty_chunks = EmptyChunkPolicy::Keep,
                "skip" => self.chunking.empty_chunks = EmptyChunkPolicy::Skip,
                other => tracing::warn!("Ignoring unknown MDINDEX_EMPTY_CHUNKS value '{}'", other),
            }
        }

        // Output configuration
        if let Ok(path) = env::var("MDINDEX_OUTPUT") {
            self.output.path = PathBuf::from(path);
        }
        if let Ok(pretty) = env::var("MDINDEX_OUTPUT_PRETTY") {
            if let Ok(p) = pretty.parse() {
                self.output.pretty = p;
            }
        }

        // Index configuration
        if let Ok(endpoint) = env::var("MDINDEX_INDEX_ENDPOINT") {
            self.index.endpoint = Some(endpoint);
        }
        if let Ok(app_id) = env::var("MDINDEX_APP_ID") {
            self.index.application_id = Some(app_id);
        }
        if let Ok(api_key) = env::var("MDINDEX_API_KEY") {
            self.index.api_key = Some(api_key);
        }
        if let Ok(index_name) = env::var("MDINDEX_INDEX_NAME") {
            self.index.index_name = Some(index_name);
        }
        if let Ok(timeout) = env::var("MDINDEX_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.index.timeout_sec = t;
            }
        }
        if let Ok(retries) = env::var("MDINDEX_MAX_RETRIES") {
            if let Ok(r) = retries.parse() {
                self.index.max_retries = r;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.key_words == 0 {
            return Err(MdIndexError::ConfigError(
                "Key words must be non-zero".to_string(),
            ));
        }

        if self.index.timeout_sec == 0 {
            return Err(MdIndexError::ConfigError(
                "Index timeout must be non-zero".to_string(),
            ));
        }

        if let Some(endpoint) = &self.index.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(MdIndexError::ConfigError(format!(
                    "Index endpoint must be an http(s) URL, got '{endpoint}'"
                )));
            }
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Docs dir: {:?}", self.source.docs_dir);
        tracing::info!("  Key words: {}", self.chunking.key_words);
        tracing::info!("  Empty chunks: {:?}", self.chunking.empty_chunks);
        tracing::info!("  Output: {:?}", self.output.path);
        tracing::info!(
            "  Index: {} / {}",
            self.index.endpoint.as_deref().unwrap_or("<unset>"),
            self.index.index_name.as_deref().unwrap_or("<unset>")
        );
        tracing::info!(
            "  API key: {}",
            if self.index.api_key.is_some() {
                "<redacted>"
            } else {
                "<unset>"
            }
        );
    }
}

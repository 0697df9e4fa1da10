//! Configuration management for context42.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Context42Error, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Loading and chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Compression level used when the caller gives none
    #[serde(default = "default_compression_level")]
    pub compression_level: f64,

    /// Characters per chunk at compression level 1.0
    #[serde(default = "default_base_chunk_size")]
    pub base_chunk_size: usize,

    /// Floor on characters per chunk
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,

    /// Cap on the overlap between consecutive chunks
    #[serde(default = "default_max_overlap")]
    pub max_overlap: usize,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Characters shown in a result preview
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Limits configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Wall-clock limit on loading a directory, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

// Default value functions
fn default_compression_level() -> f64 {
    1.0
}

fn default_base_chunk_size() -> usize {
    crate::core::indexer::chunker::BASE_CHUNK_SIZE
}

fn default_min_chunk_size() -> usize {
    crate::core::indexer::chunker::MIN_CHUNK_SIZE
}

fn default_max_overlap() -> usize {
    crate::core::indexer::chunker::MAX_OVERLAP
}

fn default_max_file_size() -> usize {
    10
}

fn default_k() -> usize {
    5
}

fn default_preview_chars() -> usize {
    crate::core::search::DEFAULT_PREVIEW_CHARS
}

fn default_max_query_length() -> usize {
    500
}

fn default_request_timeout() -> u64 {
    300
}

fn default_include_patterns() -> Vec<String> {
    [
        "*.txt", "*.md", "*.rst", "*.adoc", "*.org", "*.tex", "*.csv", "*.json", "*.yaml",
        "*.yml", "*.toml", "*.ini", "*.cfg", "*.log", "*.html", "*.xml", "*.rs", "*.py",
        "*.js", "*.ts", "*.go", "*.java", "*.c", "*.h", "*.cpp", "*.sh",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_exclude_patterns() -> Vec<String> {
    [
        // Build artifacts and dependencies
        "**/node_modules/**",
        "**/target/**",
        "**/vendor/**",
        "**/.git/**",
        "**/build/**",
        "**/__pycache__/**",
        "**/dist/**",
        "**/.venv/**",
        // Binary and media files
        "**/*.png",
        "**/*.jpg",
        "**/*.jpeg",
        "**/*.gif",
        "**/*.pdf",
        "**/*.zip",
        "**/*.gz",
        "**/*.exe",
        "**/*.so",
        "**/*.dylib",
        "**/*.bin",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            compression_level: default_compression_level(),
            base_chunk_size: default_base_chunk_size(),
            min_chunk_size: default_min_chunk_size(),
            max_overlap: default_max_overlap(),
            max_file_size_mb: default_max_file_size(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            preview_chars: default_preview_chars(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_sec: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Context42Error::ConfigError(format!("Failed to read config file: {e}")))?;

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
    /// Priority order:
    /// 1. CONTEXT42_CONFIG env var
    /// 2. XDG config file (~/.config/context42/config.toml)
    /// 3. ./context42.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("CONTEXT42_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("context42.toml").exists() {
                Self::from_file("context42.toml")?
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
        if let Ok(level) = env::var("CONTEXT42_COMPRESSION") {
            if let Ok(l) = level.parse() {
                self.indexing.compression_level = l;
            }
        }
        if let Ok(max_size) = env::var("CONTEXT42_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.indexing.max_file_size_mb = size;
            }
        }

        if let Ok(default_k) = env::var("CONTEXT42_DEFAULT_K") {
            if let Ok(k) = default_k.parse() {
                self.search.default_k = k;
            }
        }
        if let Ok(preview) = env::var("CONTEXT42_PREVIEW_CHARS") {
            if let Ok(p) = preview.parse() {
                self.search.preview_chars = p;
            }
        }
        if let Ok(max_query_len) = env::var("CONTEXT42_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        if let Ok(timeout) = env::var("CONTEXT42_REQUEST_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.limits.request_timeout_sec = t;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(self.indexing.compression_level > 0.0) {
            return Err(Context42Error::ConfigError(
                "Compression level must be positive".to_string(),
            ));
        }

        if self.indexing.base_chunk_size == 0 || self.indexing.min_chunk_size == 0 {
            return Err(Context42Error::ConfigError(
                "Chunk sizes must be non-zero".to_string(),
            ));
        }

        if self.indexing.min_chunk_size > self.indexing.base_chunk_size {
            return Err(Context42Error::ConfigError(
                "Minimum chunk size cannot exceed base chunk size".to_string(),
            ));
        }

        if self.search.default_k == 0 {
            return Err(Context42Error::ConfigError(
                "Default k must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(Context42Error::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.limits.request_timeout_sec == 0 {
            return Err(Context42Error::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Compression level: {}", self.indexing.compression_level);
        tracing::info!(
            "  Chunk size: base {} / min {} chars, overlap cap {}",
            self.indexing.base_chunk_size,
            self.indexing.min_chunk_size,
            self.indexing.max_overlap
        );
        tracing::info!("  Max file size: {} MB", self.indexing.max_file_size_mb);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.indexing.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::info!("  Default k: {}", self.search.default_k);
        tracing::info!("  Preview: {} chars", self.search.preview_chars);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Request timeout: {}s", self.limits.request_timeout_sec);
    }
}

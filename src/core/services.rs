//! Unified service container for context42
//!
//! Bundles the configuration with the chunker and search engine it
//! describes, and runs directory loads for the front ends.

use crate::core::config::Config;
use crate::core::error::{Context42Error, Result};
use crate::core::indexer::{Chunker, DocumentLoader};
use crate::core::search::SearchEngine;
use crate::core::session::Session;
use crate::core::types::LoadReport;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Chunker built from the indexing config
    pub chunker: Chunker,

    /// Search engine built from the search config
    pub engine: SearchEngine,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let chunker = Chunker::new(
            config.indexing.base_chunk_size,
            config.indexing.min_chunk_size,
            config.indexing.max_overlap,
        )?;
        let engine = SearchEngine::with_preview_chars(config.search.preview_chars);

        Ok(Self {
            chunker,
            engine,
            config: Arc::new(config),
        })
    }

    /// Create a DocumentLoader with request-specific patterns
    ///
    /// Empty pattern lists fall back to the configured defaults.
    pub fn create_loader(
        &self,
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
    ) -> Result<DocumentLoader> {
        let include_patterns = if include_patterns.is_empty() {
            self.config.indexing.include_patterns.clone()
        } else {
            include_patterns
        };

        let exclude_patterns = if exclude_patterns.is_empty() {
            self.config.indexing.exclude_patterns.clone()
        } else {
            exclude_patterns
        };

        DocumentLoader::new(
            include_patterns,
            exclude_patterns,
            self.config.indexing.max_file_size_mb,
        )
    }

    /// Load a directory on the blocking pool, bounded by the
    /// configured request timeout.
    pub async fn load_directory(
        &self,
        root: &Path,
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
    ) -> Result<LoadReport> {
        let loader = self.create_loader(include_patterns, exclude_patterns)?;
        let root: PathBuf = root.to_path_buf();
        let limit = Duration::from_secs(self.config.limits.request_timeout_sec);

        let task = tokio::task::spawn_blocking(move || loader.load_directory(&root));

        match tokio::time::timeout(limit, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(Context42Error::LoadFailed(format!(
                "Loader task failed: {join_err}"
            ))),
            Err(_) => Err(Context42Error::Timeout(limit)),
        }
    }

    /// Load `root` and swap it into `session`.
    ///
    /// The session is left untouched if loading fails.
    pub async fn load_into(
        &self,
        session: &mut Session,
        root: &Path,
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
    ) -> Result<()> {
        let report = self
            .load_directory(root, include_patterns, exclude_patterns)
            .await?;
        session.replace_documents(root, report);
        Ok(())
    }

    /// The caller's compression level, or the configured default
    pub fn compression_level(&self, requested: Option<f64>) -> f64 {
        requested.unwrap_or(self.config.indexing.compression_level)
    }

    /// Reject queries longer than the configured maximum
    pub fn validate_query(&self, query: &str) -> Result<()> {
        let len = query.chars().count();
        if len > self.config.search.max_query_length {
            return Err(Context42Error::InvalidQuery(format!(
                "Query is {len} characters, maximum is {}",
                self.config.search.max_query_length
            )));
        }
        Ok(())
    }
}

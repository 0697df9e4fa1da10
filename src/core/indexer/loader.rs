//! Directory loading.
//!
//! Coordinates the read side of the workflow:
//! 1. Walk the directory tree
//! 2. Read each file as UTF-8 text
//! 3. Turn it into a `Document` named by its path relative to the root
//!
//! Files that cannot be read are reported as warnings in the
//! returned `LoadReport` rather than aborting the load.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::error::{Context42Error, Result};
use crate::core::indexer::FileWalker;
use crate::core::types::{Document, LoadReport, LoadWarning};

/// Reads a directory of text files into documents
pub struct DocumentLoader {
    walker: FileWalker,
}

impl DocumentLoader {
    /// Create a new loader
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    /// * `exclude_patterns` - Glob patterns for files to exclude
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let walker = FileWalker::new(include_patterns, exclude_patterns, max_file_size_mb)?;
        Ok(Self { walker })
    }

    /// Load every matching file under `root`.
    ///
    /// # Errors
    ///
    /// `InvalidPath` if `root` does not exist or is not a directory.
    /// Per-file problems never fail the load.
    pub fn load_directory(&self, root: &Path) -> Result<LoadReport> {
        let start = Instant::now();

        if !root.is_dir() {
            return Err(Context42Error::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        tracing::info!("Loading documents from {:?}", root);
        let walked = self.walker.collect_files(root);
        tracing::info!("Found {} files to load", walked.files.len());

        let mut documents = Vec::with_capacity(walked.files.len());
        let mut warnings = walked.skipped;

        for (idx, file_path) in walked.files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files read", idx, walked.files.len());
            }

            match read_document(root, file_path) {
                Ok(doc) => {
                    tracing::debug!("Loaded {:?} ({} chars)", file_path, doc.size);
                    documents.push(doc);
                }
                Err(reason) => {
                    tracing::warn!("Skipping {:?}: {}", file_path, reason);
                    warnings.push(LoadWarning {
                        path: file_path.clone(),
                        reason,
                    });
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Loading complete: {} documents, {} skipped in {}ms",
            documents.len(),
            warnings.len(),
            duration_ms
        );

        Ok(LoadReport {
            documents,
            warnings,
            duration_ms,
        })
    }
}

/// Read a single file into a document, or say why it could not be.
fn read_document(root: &Path, path: &Path) -> std::result::Result<Document, String> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            "not valid UTF-8 text".to_string()
        } else {
            format!("read failed: {e}")
        }
    })?;

    let name = path
        .strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Ok(Document::new(name, content))
}

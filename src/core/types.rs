//! Core data types for context42.
//!
//! Documents come from the loader, chunks from the chunker and
//! scored chunks from the search engine. None of them are persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A loaded text file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Path relative to the loaded root, `/`-separated
    pub name: String,

    /// Full text body
    pub content: String,

    /// Length of `content` in characters
    pub size: usize,

    /// Lower-cased file extension without the dot (empty if none)
    pub extension: String,
}

impl Document {
    /// Build a document, deriving `size` from the content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let content = content.into();
        let extension = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        Self {
            size: content.chars().count(),
            name,
            content,
            extension,
        }
    }
}

/// A window of a document's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// `{document_name}_{start}`
    pub id: String,

    /// Name of the source document
    pub document_name: String,

    /// Window text, exactly the document's characters `start..end`
    pub content: String,

    /// Character offset where the window starts
    pub start: usize,

    /// Character offset where the window ends (exclusive)
    pub end: usize,
}

/// A chunk matched by a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredChunk {
    #[serde(flatten)]
    pub chunk: Chunk,

    /// Sum of occurrences times term length over all query terms
    pub score: u64,

    /// Bounded prefix of the content
    pub preview: String,
}

/// A file that could not be turned into a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of loading a directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// Documents in walk order
    pub documents: Vec<Document>,

    /// Files that were skipped, with the reason
    pub warnings: Vec<LoadWarning>,

    /// Load duration in milliseconds
    pub duration_ms: u64,
}

/// Sliding-window parameters derived from a compression level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowParams {
    pub chunk_size: usize,
    pub overlap: usize,
    pub step: usize,
}

/// Statistics from a chunking operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkStats {
    pub documents: usize,
    pub chunks_created: usize,
    pub compression_level: f64,
    pub chunk_size: usize,
    pub overlap: usize,
    pub step: usize,
}

/// Snapshot of a session's state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    pub root: Option<PathBuf>,
    pub documents: usize,
    pub total_chars: usize,
    pub warnings: usize,
    pub chunks: usize,
    pub compression_level: Option<f64>,
    pub chunk_size: Option<usize>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub chunked_at: Option<DateTime<Utc>>,
}

//! In-memory session state.
//!
//! A `Session` is the context object an orchestrator threads through
//! its operations: the directory that is loaded, its documents, the
//! current chunk set and the compression level that produced it. It
//! lives only as long as its owner; nothing is written to disk.
//!
//! Lifecycle: `new()` creates an empty session, `replace_documents`
//! swaps in a freshly loaded directory (discarding old chunks),
//! `rechunk` replaces the chunk set, `clear` discards everything.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::core::indexer::Chunker;
use crate::core::search::SearchEngine;
use crate::core::types::{
    Chunk, ChunkStats, Document, LoadReport, LoadWarning, ScoredChunk, SessionStatus,
};

/// Loaded documents and their current chunking
#[derive(Debug, Default)]
pub struct Session {
    root: Option<PathBuf>,
    documents: Vec<Document>,
    warnings: Vec<LoadWarning>,
    chunks: Vec<Chunk>,
    compression_level: Option<f64>,
    chunk_size: Option<usize>,
    loaded_at: Option<DateTime<Utc>>,
    chunked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded documents.
    ///
    /// Any chunks from a previous load are discarded, since they no
    /// longer describe the documents.
    pub fn replace_documents(&mut self, root: impl Into<PathBuf>, report: LoadReport) {
        let root = root.into();
        tracing::info!(
            "Session now holds {} documents from {:?} ({} skipped)",
            report.documents.len(),
            root,
            report.warnings.len()
        );

        *self = Self {
            root: Some(root),
            documents: report.documents,
            warnings: report.warnings,
            loaded_at: Some(Utc::now()),
            ..Self::default()
        };
    }

    /// Chunk the loaded documents at `compression_level`, replacing
    /// the current chunk set.
    pub fn rechunk(&mut self, chunker: &Chunker, compression_level: f64) -> ChunkStats {
        if !(compression_level > 0.0) {
            tracing::warn!(
                "Compression level {} is not positive, using minimum chunk size",
                compression_level
            );
        }

        let window = chunker.window_for(compression_level);
        self.chunks = chunker.chunk_documents(&self.documents, compression_level);
        self.compression_level = Some(compression_level);
        self.chunk_size = Some(window.chunk_size);
        self.chunked_at = Some(Utc::now());

        tracing::info!(
            "Chunked {} documents into {} chunks (level {}, size {}, overlap {})",
            self.documents.len(),
            self.chunks.len(),
            compression_level,
            window.chunk_size,
            window.overlap
        );

        ChunkStats {
            documents: self.documents.len(),
            chunks_created: self.chunks.len(),
            compression_level,
            chunk_size: window.chunk_size,
            overlap: window.overlap,
            step: window.step,
        }
    }

    /// Search the current chunk set.
    ///
    /// A negative `top_k` is treated like zero and yields nothing.
    pub fn search(&self, engine: &SearchEngine, query: &str, top_k: i64) -> Vec<ScoredChunk> {
        let top_k = usize::try_from(top_k).unwrap_or(0);
        engine.search(&self.chunks, query, top_k)
    }

    /// Discard everything and return to the empty state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the session's state
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            root: self.root.clone(),
            documents: self.documents.len(),
            total_chars: self.documents.iter().map(|d| d.size).sum(),
            warnings: self.warnings.len(),
            chunks: self.chunks.len(),
            compression_level: self.compression_level,
            chunk_size: self.chunk_size,
            loaded_at: self.loaded_at,
            chunked_at: self.chunked_at,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn compression_level(&self) -> Option<f64> {
        self.compression_level
    }

    /// True once a directory has been loaded
    pub fn is_loaded(&self) -> bool {
        self.root.is_some()
    }
}

//! Compression-level driven text chunking.
//!
//! A compression level picks the window size: higher levels give
//! smaller chunks, bottoming out at a fixed minimum. Windows slide
//! across each document with a quarter-size overlap (capped), and
//! all sizes are measured in **characters**, not bytes, so window
//! boundaries always fall on valid UTF-8 boundaries.
//!
//! # Example
//!
//! ```
//! use context42::core::indexer::chunker::{chunk, chunk_size_for};
//! use context42::core::types::Document;
//!
//! assert_eq!(chunk_size_for(1.0), 1000);
//! assert_eq!(chunk_size_for(4.0), 250);
//! assert_eq!(chunk_size_for(16.0), 100);
//!
//! let docs = vec![Document::new("a.txt", "cat dog cat")];
//! let chunks = chunk(&docs, 1.0);
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].id, "a.txt_0");
//! ```

use crate::core::error::{Context42Error, Result};
use crate::core::types::{Chunk, Document, WindowParams};

/// Chunk size at compression level 1.0
pub const BASE_CHUNK_SIZE: usize = 1000;

/// Smallest chunk size any compression level can produce
pub const MIN_CHUNK_SIZE: usize = 100;

/// Upper bound on the overlap between consecutive windows
pub const MAX_OVERLAP: usize = 100;

/// Sliding-window chunker.
///
/// Holds only the sizing constants; every call is a pure function
/// of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    base_size: usize,
    min_size: usize,
    max_overlap: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            base_size: BASE_CHUNK_SIZE,
            min_size: MIN_CHUNK_SIZE,
            max_overlap: MAX_OVERLAP,
        }
    }
}

impl Chunker {
    /// Create a chunker with custom sizing constants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the constants could yield an empty
    /// window (and therefore a non-advancing step).
    ///
    /// # Example
    ///
    /// ```
    /// use context42::core::indexer::Chunker;
    ///
    /// let chunker = Chunker::new(2000, 200, 50).unwrap();
    /// assert_eq!(chunker.chunk_size_for(1.0), 2000);
    /// assert!(Chunker::new(1000, 0, 100).is_err());
    /// ```
    pub fn new(base_size: usize, min_size: usize, max_overlap: usize) -> Result<Self> {
        if base_size == 0 {
            return Err(Context42Error::ConfigError(
                "Base chunk size must be non-zero".to_string(),
            ));
        }

        if min_size == 0 {
            return Err(Context42Error::ConfigError(
                "Minimum chunk size must be non-zero".to_string(),
            ));
        }

        Ok(Self {
            base_size,
            min_size,
            max_overlap,
        })
    }

    /// Chunk size in characters for a compression level.
    ///
    /// `max(min, floor(base / level))`. Levels that are not strictly
    /// positive (including NaN) fall back to the minimum size.
    pub fn chunk_size_for(&self, compression_level: f64) -> usize {
        if !(compression_level > 0.0) {
            return self.min_size;
        }

        // float -> int casts saturate, so tiny levels give usize::MAX
        let size = (self.base_size as f64 / compression_level).floor() as usize;
        size.max(self.min_size)
    }

    /// Window size, overlap and step for a compression level.
    pub fn window_for(&self, compression_level: f64) -> WindowParams {
        let chunk_size = self.chunk_size_for(compression_level);
        let overlap = (chunk_size / 4).min(self.max_overlap);

        // overlap <= chunk_size / 4 and chunk_size >= min_size > 0
        let step = chunk_size - overlap;
        debug_assert!(step > 0, "step must advance the window");

        WindowParams {
            chunk_size,
            overlap,
            step,
        }
    }

    /// Chunk every document, preserving document order and then
    /// ascending start offset.
    pub fn chunk_documents(&self, documents: &[Document], compression_level: f64) -> Vec<Chunk> {
        let window = self.window_for(compression_level);

        documents
            .iter()
            .flat_map(|doc| self.chunk_text(&doc.name, &doc.content, window))
            .collect()
    }

    /// Slide a window across one document's text.
    ///
    /// Chunk content is the raw window text. Windows that are blank
    /// after trimming are dropped and do not consume an id. The walk
    /// stops at the first window that reaches the end of the text, so
    /// a document no longer than one window yields one chunk.
    pub fn chunk_text(&self, document_name: &str, text: &str, window: WindowParams) -> Vec<Chunk> {
        // Collect character indices (byte offset, char) so slicing
        // never lands inside a multi-byte sequence
        let char_indices: Vec<(usize, char)> = text.char_indices().collect();
        let len = char_indices.len();

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < len {
            let end = (start + window.chunk_size).min(len);

            let byte_start = char_indices[start].0;
            let byte_end = if end < len {
                char_indices[end].0
            } else {
                text.len()
            };

            let content = &text[byte_start..byte_end];
            if !content.trim().is_empty() {
                chunks.push(Chunk {
                    id: format!("{document_name}_{start}"),
                    document_name: document_name.to_string(),
                    content: content.to_string(),
                    start,
                    end,
                });
            }

            if end == len {
                break;
            }
            start += window.step.max(1);
        }

        chunks
    }
}

/// Chunk size for a compression level with the default constants.
pub fn chunk_size_for(compression_level: f64) -> usize {
    Chunker::default().chunk_size_for(compression_level)
}

/// Chunk documents with the default constants.
pub fn chunk(documents: &[Document], compression_level: f64) -> Vec<Chunk> {
    Chunker::default().chunk_documents(documents, compression_level)
}

//! context42 - chunk a directory of text files and search it by keyword
//!
//! Documents are split into overlapping fixed-size character windows
//! whose size is derived from a compression level, then ranked against
//! keyword queries by term frequency weighted by term length.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - indexer (file walking, loading, chunking)
//!   - search (keyword scoring, top-K)
//!   - session (loaded directory state)
//!   - config, error, types, xdg, services
//!
//! - **cli**: clap front end and interactive shell (depends on core)
//!
//! # Example
//!
//! ```
//! use context42::core::types::Document;
//! use context42::{chunk, search};
//!
//! let docs = vec![Document::new("a.txt", "cat dog cat")];
//! let chunks = chunk(&docs, 1.0);
//! let results = search(&chunks, "cat", 5);
//!
//! assert_eq!(results[0].score, 6);
//! assert_eq!(results[0].preview, "cat dog cat");
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Context42Error, Result};
pub use crate::core::indexer::{chunk, chunk_size_for, Chunker};
pub use crate::core::search::{search, SearchEngine};
pub use crate::core::services::Services;
pub use crate::core::session::Session;
pub use crate::core::types::*;

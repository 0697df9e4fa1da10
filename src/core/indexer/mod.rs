//! Document loading and chunking.
//!
//! - Directory walking with glob include/exclude patterns
//! - UTF-8 file reading into `Document`s, with per-file warnings
//! - Compression-level driven sliding-window chunking
//!
//! # Safety
//!
//! The chunker windows text by `char_indices()`, so chunk
//! boundaries never split a multi-byte UTF-8 sequence.

pub mod chunker;
pub mod loader;
pub mod walker;

pub use chunker::{chunk, chunk_size_for, Chunker};
pub use loader::DocumentLoader;
pub use walker::FileWalker;

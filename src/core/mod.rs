//! Core domain logic (front-end agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: Config file location
//! - **indexer**: Directory walking, file loading, chunking
//! - **search**: Keyword scoring and top-K selection
//! - **session**: In-memory state of a loaded directory
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod session;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Context42Error, Result};
pub use indexer::{chunk, chunk_size_for};
pub use search::search;
pub use services::Services;
pub use session::Session;

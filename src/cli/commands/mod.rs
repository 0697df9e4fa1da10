//! CLI command implementations
//!
//! Each command module holds its clap arguments, a serializable
//! response and an `execute` entry point. One-shot commands build a
//! fresh `Session` per invocation.

pub mod chunk;
pub mod chunk_size;
pub mod completions;
pub mod config;
pub mod load;
pub mod search;
pub mod shell;

// Re-export argument types for use in mod.rs
pub use chunk::ChunkArgs;
pub use chunk_size::ChunkSizeArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use load::LoadArgs;
pub use search::SearchArgs;
pub use shell::ShellArgs;

use crate::core::error::Result;
use crate::core::services::Services;
use crate::core::session::Session;
use crate::core::types::ChunkStats;
use std::path::Path;

/// Load `path` into a new session and chunk it at `level`
/// (or the configured default).
pub(crate) async fn load_and_chunk(
    services: &Services,
    path: &Path,
    include: Vec<String>,
    exclude: Vec<String>,
    level: Option<f64>,
) -> Result<(Session, ChunkStats)> {
    let mut session = Session::new();
    services
        .load_into(&mut session, path, include, exclude)
        .await?;

    let level = services.compression_level(level);
    let stats = session.rechunk(&services.chunker, level);
    Ok((session, stats))
}

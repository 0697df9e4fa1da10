//! Chunk command - load a directory and split it into chunks

use crate::cli::commands::load_and_chunk;
use crate::cli::output::{colors, print_header, print_load_warnings};
use crate::cli::OutputFormat;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::core::types::{Chunk, ChunkStats};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk-documents command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// Directory to load
    pub path: PathBuf,

    /// Compression level (chunk size = max(100, 1000 / level))
    #[arg(long, short = 'c', allow_negative_numbers = true)]
    pub compression: Option<f64>,

    /// Print every chunk, not just the totals
    #[arg(long)]
    pub show: bool,

    /// Include patterns (glob)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Exclude patterns (glob)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,
}

/// Chunk response
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub root: String,
    #[serde(flatten)]
    pub stats: ChunkStats,
    pub skipped_files: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<Chunk>>,
}

/// Load and chunk the directory
pub async fn chunk(args: ChunkArgs, services: &Services) -> Result<ChunkResponse> {
    let (session, stats) = load_and_chunk(
        services,
        &args.path,
        args.include,
        args.exclude,
        args.compression,
    )
    .await?;

    print_load_warnings(session.warnings());

    Ok(ChunkResponse {
        root: args.path.display().to_string(),
        stats,
        skipped_files: session.warnings().len(),
        chunks: args.show.then(|| session.chunks().to_vec()),
    })
}

/// Execute the chunk-documents command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let response = chunk(args, services).await?;

    match format {
        OutputFormat::Human => {
            if let Some(chunks) = &response.chunks {
                for c in chunks {
                    println!(
                        "{} {}",
                        colors::file_path(&c.id),
                        colors::dim(&format!("[{}..{}]", c.start, c.end))
                    );
                    println!("    {}", colors::dim(&first_line(&c.content)));
                }
                println!();
            }

            print_header("Chunking:");
            let s = &response.stats;
            println!("  documents:         {}", colors::number(&s.documents.to_string()));
            println!("  chunks:            {}", colors::number(&s.chunks_created.to_string()));
            println!("  compression level: {}", s.compression_level);
            println!("  chunk size:        {}", s.chunk_size);
            println!("  overlap:           {}", s.overlap);
            println!("  step:              {}", s.step);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn first_line(content: &str) -> String {
    let line = content.lines().next().unwrap_or("");
    if line.chars().count() > 80 {
        let head: String = line.chars().take(77).collect();
        format!("{head}...")
    } else {
        line.to_string()
    }
}

//! Chunk-size command - show window parameters for compression levels

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the chunk-size command
#[derive(Args, Debug)]
pub struct ChunkSizeArgs {
    /// Compression levels to evaluate
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub levels: Vec<f64>,
}

/// Window parameters for one level
#[derive(Debug, Serialize, PartialEq)]
pub struct ChunkSizeRow {
    pub compression_level: f64,
    pub chunk_size: usize,
    pub overlap: usize,
    pub step: usize,
}

/// Compute one row per requested level
pub fn rows(args: &ChunkSizeArgs, services: &Services) -> Vec<ChunkSizeRow> {
    args.levels
        .iter()
        .map(|&level| {
            let w = services.chunker.window_for(level);
            ChunkSizeRow {
                compression_level: level,
                chunk_size: w.chunk_size,
                overlap: w.overlap,
                step: w.step,
            }
        })
        .collect()
}

/// Execute the chunk-size command
pub fn execute(
    args: ChunkSizeArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = rows(&args, services);

    match format {
        OutputFormat::Human => {
            print_header(&format!(
                "{:>8}  {:>10}  {:>7}  {:>5}",
                "level", "chunk_size", "overlap", "step"
            ));
            for row in &rows {
                println!(
                    "{:>8}  {:>10}  {:>7}  {:>5}",
                    row.compression_level,
                    colors::number(&row.chunk_size.to_string()),
                    row.overlap,
                    row.step
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

//! Search command - load, chunk and search a directory

use crate::cli::commands::load_and_chunk;
use crate::cli::output::{colors, indent_preview, print_load_warnings};
use crate::cli::OutputFormat;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::core::types::ScoredChunk;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Directory to load
    pub path: PathBuf,

    /// Search query (whitespace-separated keywords, case-insensitive)
    pub query: String,

    /// Compression level (chunk size = max(100, 1000 / level))
    #[arg(long, short = 'c', allow_negative_numbers = true)]
    pub compression: Option<f64>,

    /// Maximum number of results [default: search.default_k]
    #[arg(long, short = 'k', allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Only show chunk ids (no previews)
    #[arg(long)]
    pub files_only: bool,

    /// Include patterns (glob)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Exclude patterns (glob)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub id: String,
    pub document: String,
    pub start: usize,
    pub end: usize,
    pub score: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub root: String,
    pub compression_level: f64,
    pub chunks_searched: usize,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Run the search and build the response
pub async fn search(args: SearchArgs, services: &Services) -> Result<SearchResponseOutput> {
    services.validate_query(&args.query)?;

    let (session, stats) = load_and_chunk(
        services,
        &args.path,
        args.include,
        args.exclude,
        args.compression,
    )
    .await?;

    print_load_warnings(session.warnings());

    let top_k = args
        .limit
        .unwrap_or_else(|| i64::try_from(services.config.search.default_k).unwrap_or(i64::MAX));
    let results = session.search(&services.engine, &args.query, top_k);

    Ok(build_output(
        args.query,
        args.path.display().to_string(),
        stats.compression_level,
        stats.chunks_created,
        results,
        args.files_only,
    ))
}

/// Shape scored chunks into the response
pub fn build_output(
    query: String,
    root: String,
    compression_level: f64,
    chunks_searched: usize,
    results: Vec<ScoredChunk>,
    files_only: bool,
) -> SearchResponseOutput {
    SearchResponseOutput {
        query,
        root,
        compression_level,
        chunks_searched,
        total_results: results.len(),
        results: results
            .into_iter()
            .enumerate()
            .map(|(i, r)| SearchResultItem {
                rank: i + 1,
                id: r.chunk.id,
                document: r.chunk.document_name,
                start: r.chunk.start,
                end: r.chunk.end,
                score: r.score,
                preview: if files_only { None } else { Some(r.preview) },
            })
            .collect(),
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let files_only = args.files_only;
    let output = search(args, services).await?;

    match format {
        OutputFormat::Human => print_results(&output, files_only),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Print results in the human format
pub fn print_results(output: &SearchResponseOutput, files_only: bool) {
    if output.results.is_empty() {
        println!(
            "No results found for '{}' in {} chunks",
            colors::label(&output.query),
            colors::number(&output.chunks_searched.to_string())
        );
        return;
    }

    println!(
        "Found {} result(s) in {} chunks:\n",
        colors::number(&output.total_results.to_string()),
        colors::number(&output.chunks_searched.to_string())
    );

    for result in &output.results {
        if files_only {
            println!("{}", colors::file_path(&result.id));
            continue;
        }

        println!(
            "[{}] {} {} {}",
            colors::rank(&result.rank.to_string()),
            colors::file_path(&result.id),
            colors::dim(&format!("[{}..{}]", result.start, result.end)),
            colors::score(&format!("(score: {})", result.score))
        );
        if let Some(preview) = &result.preview {
            for line in indent_preview(preview, 5) {
                println!("{}", colors::dim(&line));
            }
        }
        println!();
    }
}

//! Load command - read a directory and report its documents

use crate::cli::output::{colors, format_chars, format_duration, print_load_warnings};
use crate::cli::OutputFormat;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::core::types::LoadWarning;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the load-directory command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Directory to load
    pub path: PathBuf,

    /// Include patterns (glob). Defaults to the configured text extensions.
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Exclude patterns (glob)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,
}

/// One loaded document
#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    pub size: usize,
    pub extension: String,
}

/// Load response
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub root: String,
    pub documents: Vec<DocumentSummary>,
    pub total_chars: usize,
    pub warnings: Vec<LoadWarning>,
    pub duration_ms: u64,
}

/// Load the directory and summarise it
pub async fn load(args: LoadArgs, services: &Services) -> Result<LoadResponse> {
    let report = services
        .load_directory(&args.path, args.include, args.exclude)
        .await?;

    let documents: Vec<DocumentSummary> = report
        .documents
        .iter()
        .map(|d| DocumentSummary {
            name: d.name.clone(),
            size: d.size,
            extension: d.extension.clone(),
        })
        .collect();

    Ok(LoadResponse {
        root: args.path.display().to_string(),
        total_chars: documents.iter().map(|d| d.size).sum(),
        documents,
        warnings: report.warnings,
        duration_ms: report.duration_ms,
    })
}

/// Execute the load-directory command
pub async fn execute(
    args: LoadArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let response = load(args, services).await?;

    match format {
        OutputFormat::Human => {
            print_load_warnings(&response.warnings);

            for doc in &response.documents {
                println!(
                    "  {} {}",
                    colors::file_path(&doc.name),
                    colors::dim(&format!("({})", format_chars(doc.size)))
                );
            }

            println!(
                "\nLoaded {} documents ({}) from {} in {}",
                colors::number(&response.documents.len().to_string()),
                format_chars(response.total_chars),
                colors::file_path(&response.root),
                format_duration(response.duration_ms as f64 / 1000.0)
            );
            if !response.warnings.is_empty() {
                println!(
                    "{}",
                    colors::warning(&format!("Skipped {} files", response.warnings.len()))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

//! context42 CLI - chunk a directory of text files and search it
//!
//! # Examples
//!
//! ```bash
//! # Load a directory and list its documents
//! context42 load-directory ./notes
//!
//! # Chunk at compression level 4 (250-char windows)
//! context42 chunk-documents ./notes -c 4
//!
//! # Search for keywords
//! context42 search ./notes "error handling" -k 3
//!
//! # Interactive shell
//! context42 shell ./notes
//! ```

use clap::Parser;
use context42::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("context42=warn"));

    // stderr keeps stdout clean for --format json
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

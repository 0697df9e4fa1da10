//! CLI adapter for context42
//!
//! Every command builds its own `Session`, so one-shot commands load,
//! chunk and search in a single invocation. The `shell` command keeps
//! a session alive across queries.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap + shell)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// context42 - keyword search over chunked text files
///
/// Load a directory, split its files into overlapping chunks sized by a
/// compression level, and rank the chunks against keyword queries.
#[derive(Parser, Debug)]
#[command(name = "context42")]
#[command(version)]
#[command(about = "Chunk a directory of text files and search it by keyword", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a directory and report its documents
    #[command(name = "load-directory")]
    LoadDirectory(commands::LoadArgs),

    /// Load a directory and split it into chunks
    #[command(name = "chunk-documents")]
    ChunkDocuments(commands::ChunkArgs),

    /// Load, chunk and search a directory
    Search(commands::SearchArgs),

    /// Show the chunk size, overlap and step for compression levels
    #[command(name = "chunk-size")]
    ChunkSize(commands::ChunkSizeArgs),

    /// Interactive shell over a loaded directory
    Shell(commands::ShellArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  context42 completions bash > ~/.local/share/bash-completion/completions/context42
    ///   zsh:   context42 completions zsh > ~/.zfunc/_context42
    ///   fish:  context42 completions fish > ~/.config/fish/completions/context42.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Completions don't need services
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::LoadDirectory(args) => commands::load::execute(args, &services, cli.format).await,
        Commands::ChunkDocuments(args) => {
            commands::chunk::execute(args, &services, cli.format).await
        }
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ChunkSize(args) => commands::chunk_size::execute(args, &services, cli.format),
        Commands::Shell(args) => commands::shell::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

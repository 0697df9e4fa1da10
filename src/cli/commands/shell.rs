//! Shell command - interactive session over a loaded directory
//!
//! The shell owns one `Session` for its whole lifetime. Lines starting
//! with `/` are commands; anything else is a search query.

use crate::cli::commands::search::{build_output, print_results};
use crate::cli::output::{colors, print_error, print_load_warnings, print_success, print_warning};
use crate::cli::OutputFormat;
use crate::core::error::{Context42Error, Result};
use crate::core::services::Services;
use crate::core::session::Session;
use clap::Args;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the shell command
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Directory to load on startup
    pub path: Option<PathBuf>,

    /// Initial compression level
    #[arg(long, short = 'c', allow_negative_numbers = true)]
    pub compression: Option<f64>,

    /// Initial number of results per query
    #[arg(long, short = 'k', allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

/// A parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Load(PathBuf),
    /// Rechunk, optionally switching compression level first
    Chunk(Option<f64>),
    Top(i64),
    Status,
    Clear,
    Help,
    Quit,
    Search(String),
    /// Unparseable input, with the message to show
    Invalid(String),
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Continue,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    if !line.starts_with('/') {
        return ShellCommand::Search(line.to_string());
    }

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "/load" | "/l" => {
            if rest.is_empty() {
                ShellCommand::Invalid("usage: /load <path>".to_string())
            } else {
                ShellCommand::Load(PathBuf::from(rest))
            }
        }
        "/chunk" => {
            if rest.is_empty() {
                return ShellCommand::Chunk(None);
            }
            match rest.parse::<f64>() {
                Ok(level) => ShellCommand::Chunk(Some(level)),
                Err(_) => ShellCommand::Invalid(format!("not a compression level: {rest}")),
            }
        }
        "/top" | "/k" => match rest.parse::<i64>() {
            Ok(k) => ShellCommand::Top(k),
            Err(_) => ShellCommand::Invalid("usage: /top <n>".to_string()),
        },
        "/status" | "/s" => ShellCommand::Status,
        "/clear" | "/c" => ShellCommand::Clear,
        "/help" | "/h" | "/?" => ShellCommand::Help,
        "/quit" | "/q" | "/exit" => ShellCommand::Quit,
        _ => ShellCommand::Invalid(format!("Unknown command: {cmd}")),
    }
}

/// Interactive shell state
pub struct Shell {
    services: Arc<Services>,
    session: Session,
    compression_level: f64,
    top_k: i64,
    format: OutputFormat,
}

impl Shell {
    pub fn new(
        services: Arc<Services>,
        format: OutputFormat,
        compression: Option<f64>,
        limit: Option<i64>,
    ) -> Self {
        let compression_level = services.compression_level(compression);
        let top_k = limit.unwrap_or_else(|| {
            i64::try_from(services.config.search.default_k).unwrap_or(i64::MAX)
        });

        Self {
            services,
            session: Session::new(),
            compression_level,
            top_k,
            format,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn compression_level(&self) -> f64 {
        self.compression_level
    }

    pub fn top_k(&self) -> i64 {
        self.top_k
    }

    /// Apply one command to the session
    pub async fn handle(&mut self, command: ShellCommand) -> Result<ShellAction> {
        match command {
            ShellCommand::Load(path) => self.load(path).await?,
            ShellCommand::Chunk(level) => {
                let level = level.unwrap_or(self.compression_level);
                self.rechunk(level)?;
                self.compression_level = level;
            }
            ShellCommand::Top(k) => {
                self.top_k = k;
                println!("{}", format!("Showing top {k} results.").dimmed());
            }
            ShellCommand::Status => self.print_status()?,
            ShellCommand::Clear => {
                self.session.clear();
                println!("{}", "Session cleared.".dimmed());
            }
            ShellCommand::Help => print_help(),
            ShellCommand::Quit => return Ok(ShellAction::Quit),
            ShellCommand::Search(query) => self.search(&query)?,
            ShellCommand::Invalid(message) => {
                println!("{} {}", "?".yellow(), message);
                println!("{}", "Type /help for available commands.".dimmed());
            }
        }
        Ok(ShellAction::Continue)
    }

    async fn load(&mut self, path: PathBuf) -> Result<()> {
        self.services
            .load_into(&mut self.session, &path, vec![], vec![])
            .await?;
        print_load_warnings(self.session.warnings());
        print_success(&format!(
            "Loaded {} documents from {}",
            self.session.documents().len(),
            path.display()
        ));
        self.rechunk(self.compression_level)
    }

    fn rechunk(&mut self, level: f64) -> Result<()> {
        if !self.session.is_loaded() {
            return Err(Context42Error::NotLoaded);
        }

        let stats = self.session.rechunk(&self.services.chunker, level);
        println!(
            "{} chunks (level {}, size {}, overlap {})",
            colors::number(&stats.chunks_created.to_string()),
            stats.compression_level,
            stats.chunk_size,
            stats.overlap
        );
        Ok(())
    }

    fn search(&self, query: &str) -> Result<()> {
        self.services.validate_query(query)?;
        if !self.session.is_loaded() {
            return Err(Context42Error::NotLoaded);
        }

        let results = self
            .session
            .search(&self.services.engine, query, self.top_k);
        let root = self
            .session
            .root()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let output = build_output(
            query.to_string(),
            root,
            self.session
                .compression_level()
                .unwrap_or(self.compression_level),
            self.session.chunks().len(),
            results,
            false,
        );

        match self.format {
            OutputFormat::Human => print_results(&output, false),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        }
        Ok(())
    }

    fn print_status(&self) -> Result<()> {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&self.session.status())?);
            return Ok(());
        }

        for (label, value) in self.status_lines() {
            println!("  {label:18} {value}");
        }
        Ok(())
    }

    /// Label/value pairs shown by `/status`
    pub fn status_lines(&self) -> Vec<(&'static str, String)> {
        let status = self.session.status();
        let none = || "(none)".to_string();

        let mut lines = vec![
            (
                "root:",
                status
                    .root
                    .as_ref()
                    .map(|p| colors::file_path(&p.display().to_string()).to_string())
                    .unwrap_or_else(none),
            ),
            ("documents:", status.documents.to_string()),
            ("characters:", status.total_chars.to_string()),
            ("skipped files:", status.warnings.to_string()),
            ("chunks:", status.chunks.to_string()),
            (
                "compression level:",
                status
                    .compression_level
                    .map(|l| l.to_string())
                    .unwrap_or_else(none),
            ),
        ];
        if let Some(size) = status.chunk_size {
            lines.push(("chunk size:", size.to_string()));
        }
        lines.push(("top k:", self.top_k.to_string()));
        if let Some(at) = status.loaded_at {
            lines.push(("loaded at:", at.format("%Y-%m-%d %H:%M:%S UTC").to_string()));
        }
        lines
    }

    /// Run the read-eval-print loop until /quit or Ctrl+D
    pub async fn run(&mut self, initial_path: Option<PathBuf>) -> Result<()> {
        print_welcome();

        if let Some(path) = initial_path {
            let outcome = self.handle(ShellCommand::Load(path)).await;
            report(outcome);
        }

        let mut rl = DefaultEditor::new().map_err(|e| {
            Context42Error::ConfigError(format!("Failed to initialize readline: {e}"))
        })?;

        loop {
            match rl.readline(&format!("{} ", "context42>".bright_green())) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);

                    match self.handle(parse_command(input)).await {
                        Ok(ShellAction::Quit) => break,
                        other => report(other),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(Context42Error::IoError(std::io::Error::other(format!(
                        "Readline error: {err}"
                    ))));
                }
            }
        }

        println!("{}", "Goodbye!".dimmed());
        Ok(())
    }
}

fn report(outcome: Result<ShellAction>) {
    match outcome {
        Ok(_) => {}
        Err(e) if e.is_bad_request() => print_warning(&e.message()),
        Err(e) => print_error(&e.message()),
    }
}

fn print_welcome() {
    println!();
    println!("{}", "context42 shell".bright_cyan().bold());
    println!("{}", "Type a query to search, /help for commands.".dimmed());
    println!();
}

fn print_help() {
    println!();
    println!("{}", "Available Commands:".bright_cyan());
    println!("  {:16} Load a directory and chunk it", "/load <path>".yellow());
    println!("  {:16} Rechunk, optionally at a new level", "/chunk [level]".yellow());
    println!("  {:16} Set the number of results", "/top <n>".yellow());
    println!("  {:16} Show session state", "/status".yellow());
    println!("  {:16} Discard loaded documents", "/clear".yellow());
    println!("  {:16} Show this help", "/help".yellow());
    println!("  {:16} Exit the shell", "/quit".yellow());
    println!();
}

/// Execute the shell command
pub async fn execute(
    args: ShellArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut shell = Shell::new(Arc::clone(services), format, args.compression, args.limit);
    shell.run(args.path).await?;
    Ok(())
}

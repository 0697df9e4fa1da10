//! Output formatting for CLI commands
//!
//! Helpers for human-readable output. Colors respect the NO_COLOR
//! env var through `colored`.

use crate::core::types::LoadWarning;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for file paths and document names
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for search scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Format a character count into a short human-readable size
pub fn format_chars(chars: usize) -> String {
    const K: usize = 1000;
    const M: usize = K * 1000;

    if chars >= M {
        format!("{:.1}M chars", chars as f64 / M as f64)
    } else if chars >= K {
        format!("{:.1}k chars", chars as f64 / K as f64)
    } else {
        format!("{chars} chars")
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Indent a preview for display under a result line
pub fn indent_preview(preview: &str, max_lines: usize) -> Vec<String> {
    preview
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(max_lines)
        .map(|l| format!("    {l}"))
        .collect()
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}

/// Print skipped files, one per line, on stderr
pub fn print_load_warnings(warnings: &[LoadWarning]) {
    for w in warnings {
        print_warning(&format!(
            "skipped {} ({})",
            colors::file_path(&w.path.display().to_string()),
            w.reason
        ));
    }
}

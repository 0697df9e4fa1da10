//! Tests for the show-config and completions commands

use crate::cli::test_helpers::create_cli_test_services;
use context42::cli::commands::completions::write_completions;
use context42::cli::commands::config::{execute, ConfigArgs};
use context42::cli::OutputFormat;
use clap_complete::Shell;

#[test]
fn test_show_config_both_formats() {
    let services = create_cli_test_services();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(ConfigArgs {}, &services, format);
        assert!(result.is_ok(), "{format:?} failed: {:?}", result.err());
    }
}

#[test]
fn test_zsh_completions() {
    let mut buf = Vec::new();
    write_completions(Shell::Zsh, &mut buf);

    let script = String::from_utf8(buf).unwrap();
    assert!(script.contains("#compdef context42"));
}

//! Tests for the search command
//!
//! - Ranked results with previews
//! - Empty results
//! - Query validation
//! - Output format variations

use crate::cli::test_helpers::{
    create_cli_test_services, create_cli_test_services_with, search_args,
};
use crate::common::TestRepo;
use context42::cli::commands::search::{execute, search};
use context42::cli::OutputFormat;

#[tokio::test]
async fn test_search_ranks_results() {
    let services = create_cli_test_services();
    let repo = TestRepo::small();

    let output = search(search_args(repo.path(), "cat"), &services)
        .await
        .unwrap();

    assert_eq!(output.total_results, 2);
    assert_eq!(output.results[0].rank, 1);
    assert_eq!(output.results[0].id, "notes/cats.md_0");
    assert_eq!(output.results[0].document, "notes/cats.md");
    assert_eq!(output.results[0].score, 9);
    assert_eq!(output.chunks_searched, 4);
    assert!(output.results[0].preview.is_some());
}

#[tokio::test]
async fn test_search_limit_defaults_to_config() {
    let services = create_cli_test_services_with(|c| c.search.default_k = 1);
    let repo = TestRepo::small();

    let output = search(search_args(repo.path(), "cat"), &services)
        .await
        .unwrap();

    assert_eq!(output.results.len(), 1);
}

#[tokio::test]
async fn test_search_explicit_limits() {
    let services = create_cli_test_services();
    let repo = TestRepo::small();

    for (limit, expected) in [(0, 0), (-5, 0), (1, 1), (100, 2)] {
        let mut args = search_args(repo.path(), "cat");
        args.limit = Some(limit);
        let output = search(args, &services).await.unwrap();
        assert_eq!(output.results.len(), expected, "limit {limit}");
    }
}

#[tokio::test]
async fn test_search_files_only_drops_previews() {
    let services = create_cli_test_services();
    let repo = TestRepo::small();
    let mut args = search_args(repo.path(), "cat");
    args.files_only = true;

    let output = search(args, &services).await.unwrap();

    assert!(output.results.iter().all(|r| r.preview.is_none()));
}

#[tokio::test]
async fn test_search_no_matches() {
    let services = create_cli_test_services();
    let repo = TestRepo::small();

    let output = search(search_args(repo.path(), "zebra"), &services)
        .await
        .unwrap();

    assert_eq!(output.total_results, 0);
    assert!(execute(
        search_args(repo.path(), "zebra"),
        &services,
        OutputFormat::Human
    )
    .await
    .is_ok());
}

#[tokio::test]
async fn test_search_rejects_long_query() {
    let services = create_cli_test_services_with(|c| c.search.max_query_length = 10);
    let repo = TestRepo::small();

    let err = search(search_args(repo.path(), "a very long query indeed"), &services)
        .await
        .unwrap_err();

    assert!(err.is_bad_request());
}

#[tokio::test]
async fn test_search_with_compression_level() {
    let services = create_cli_test_services();
    let repo = TestRepo::long_document(1300);
    let mut args = search_args(repo.path(), "gamma");
    args.compression = Some(4.0);
    args.limit = Some(100);

    let output = search(args, &services).await.unwrap();

    assert_eq!(output.compression_level, 4.0);
    assert_eq!(output.chunks_searched, 7);
    assert_eq!(output.total_results, 7);
}

#[tokio::test]
async fn test_search_json_format() {
    let services = create_cli_test_services();
    let repo = TestRepo::small();

    let result = execute(search_args(repo.path(), "dog"), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
}

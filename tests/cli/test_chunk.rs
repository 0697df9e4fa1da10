//! Tests for the chunk-documents and chunk-size commands

use crate::cli::test_helpers::{chunk_args, create_cli_test_services};
use crate::common::TestRepo;
use context42::cli::commands::chunk::{chunk, execute};
use context42::cli::commands::chunk_size::{self, ChunkSizeArgs};
use context42::cli::OutputFormat;

#[tokio::test]
async fn test_chunk_uses_default_level() {
    let services = create_cli_test_services();
    let repo = TestRepo::long_document(1300);

    let response = chunk(chunk_args(repo.path(), None), &services)
        .await
        .unwrap();

    assert_eq!(response.stats.compression_level, 1.0);
    assert_eq!(response.stats.chunk_size, 1000);
    assert_eq!(response.stats.chunks_created, 2);
    assert!(response.chunks.is_none());
}

#[tokio::test]
async fn test_chunk_with_level_and_show() {
    let services = create_cli_test_services();
    let repo = TestRepo::long_document(1300);
    let mut args = chunk_args(repo.path(), Some(4.0));
    args.show = true;

    let response = chunk(args, &services).await.unwrap();

    let chunks = response.chunks.unwrap();
    assert_eq!(chunks.len(), 7);
    assert_eq!(chunks[0].id, "long.txt_0");
    assert_eq!(chunks[6].id, "long.txt_1128");
    assert_eq!(response.stats.overlap, 62);
    assert_eq!(response.stats.step, 188);
}

#[tokio::test]
async fn test_chunk_json_flattens_stats() {
    let services = create_cli_test_services();
    let repo = TestRepo::with_files(&[("a.txt", "cat dog cat")]);

    let response = chunk(chunk_args(repo.path(), Some(2.0)), &services)
        .await
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["chunks_created"], 1);
    assert_eq!(json["chunk_size"], 500);
    assert!(json.get("chunks").is_none());
}

#[tokio::test]
async fn test_chunk_execute_both_formats() {
    let services = create_cli_test_services();
    let repo = TestRepo::small();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let mut args = chunk_args(repo.path(), Some(16.0));
        args.show = true;
        let result = execute(args, &services, format).await;
        assert!(result.is_ok(), "{format:?} failed: {:?}", result.err());
    }
}

#[test]
fn test_chunk_size_rows() {
    let services = create_cli_test_services();
    let args = ChunkSizeArgs {
        levels: vec![1.0, 4.0, 16.0, -1.0],
    };

    let rows = chunk_size::rows(&args, &services);
    let sizes: Vec<(usize, usize, usize)> = rows
        .iter()
        .map(|r| (r.chunk_size, r.overlap, r.step))
        .collect();

    assert_eq!(
        sizes,
        vec![(1000, 100, 900), (250, 62, 188), (100, 25, 75), (100, 25, 75)]
    );
}

#[test]
fn test_chunk_size_execute() {
    let services = create_cli_test_services();
    let args = ChunkSizeArgs {
        levels: vec![2.0],
    };

    assert!(chunk_size::execute(args, &services, OutputFormat::Json).is_ok());
}

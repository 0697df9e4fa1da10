// Chunk sizing and sliding-window behaviour

use crate::common::{assert_chunk_invariants, docs};
use context42::core::indexer::chunker::{chunk, chunk_size_for, Chunker};
use context42::core::types::Document;

#[test]
fn test_reference_chunk_sizes() {
    assert_eq!(chunk_size_for(1.0), 1000);
    assert_eq!(chunk_size_for(4.0), 250);
    assert_eq!(chunk_size_for(16.0), 100);
}

#[test]
fn test_levels_from_ten_up_saturate_at_minimum() {
    for level in [10.0, 10.5, 12.0, 50.0, 1000.0, 1e9] {
        assert_eq!(chunk_size_for(level), 100, "level {level}");
    }
}

#[test]
fn test_small_levels_grow_chunks() {
    assert_eq!(chunk_size_for(0.5), 2000);
    assert_eq!(chunk_size_for(3.0), 333);
}

#[test]
fn test_one_chunk_when_content_fits() {
    let chunks = chunk(&docs(&[("a.txt", "cat dog cat")]), 1.0);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].id, "a.txt_0");
    assert_eq!(chunks[0].content, "cat dog cat");
    assert_eq!((chunks[0].start, chunks[0].end), (0, 11));
}

#[test]
fn test_1300_chars_at_level_four() {
    let content = "abcdefghij".repeat(130);
    let documents = docs(&[("long.txt", content.as_str())]);
    let window = Chunker::default().window_for(4.0);
    assert_eq!((window.chunk_size, window.overlap, window.step), (250, 62, 188));

    let chunks = chunk(&documents, 4.0);

    // ceil(1300 / 188)
    assert_eq!(chunks.len(), 7);
    for pair in chunks.windows(2) {
        assert_eq!(pair[1].start - pair[0].start, 188);
    }
    for c in &chunks {
        assert!(c.content.chars().count() <= 250);
    }
    let last = chunks.last().unwrap();
    assert_eq!((last.start, last.end), (1128, 1300));
    assert_chunk_invariants(&documents[0], &chunks, 250);
}

#[test]
fn test_consecutive_windows_share_overlap() {
    let content = "x".repeat(5000);
    let documents = docs(&[("x.txt", content.as_str())]);
    let chunks = chunk(&documents, 2.0);
    let window = Chunker::default().window_for(2.0);

    for pair in chunks.windows(2) {
        assert_eq!(pair[0].end - pair[1].start, window.overlap);
    }

    // windows cover the whole document
    let covered: usize = chunks.iter().map(|c| c.end - c.start).sum();
    assert!(covered >= content.len());
    assert_eq!(chunks.last().unwrap().end, 5000);
}

#[test]
fn test_whitespace_windows_are_dropped() {
    let content = format!("{}{}", "a".repeat(100), " ".repeat(400));
    let chunks = chunk(&docs(&[("ws.txt", content.as_str())]), 10.0);

    // windows from 150 on are blank and leave no gaps in the ids
    let ids: Vec<&str> = chunks.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["ws.txt_0", "ws.txt_75"]);
    assert_eq!(chunks[0].content, "a".repeat(100));
    assert_eq!(chunks[1].content, format!("{}{}", "a".repeat(25), " ".repeat(75)));
}

#[test]
fn test_1150_chars_at_level_four_stops_at_the_end() {
    let content = "k".repeat(1150);
    let documents = docs(&[("k.txt", content.as_str())]);
    let chunks = chunk(&documents, 4.0);

    // the window starting at 940 already reaches the end
    assert_eq!(chunks.len(), 6);
    assert_eq!((chunks[5].start, chunks[5].end), (940, 1150));
    assert_chunk_invariants(&documents[0], &chunks, 250);
}

#[test]
fn test_document_within_one_window_is_one_chunk() {
    let content = "z".repeat(950);
    let chunks = chunk(&docs(&[("z.txt", content.as_str())]), 1.0);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].end, 950);
}

#[test]
fn test_empty_document_yields_nothing() {
    let chunks = chunk(&docs(&[("empty.txt", ""), ("blank.txt", "   \n\t ")]), 1.0);
    assert!(chunks.is_empty());
}

#[test]
fn test_chunks_follow_document_order() {
    let documents = docs(&[("b.txt", "second doc"), ("a.txt", "first doc")]);
    let chunks = chunk(&documents, 1.0);

    let names: Vec<&str> = chunks.iter().map(|c| c.document_name.as_str()).collect();
    assert_eq!(names, vec!["b.txt", "a.txt"]);
}

#[test]
fn test_chunking_is_deterministic() {
    let content = "lorem ipsum dolor sit amet ".repeat(200);
    let documents = vec![
        Document::new("one.txt", content.clone()),
        Document::new("two.txt", content.to_uppercase()),
    ];

    for level in [0.7, 1.0, 4.0, 16.0] {
        assert_eq!(chunk(&documents, level), chunk(&documents, level));
    }
}

#[test]
fn test_invariants_across_levels() {
    let content = "The quick brown fox jumps over the lazy dog.\n".repeat(90);
    let documents = docs(&[("fox.txt", content.as_str())]);

    for level in [0.5, 1.0, 2.5, 4.0, 8.0, 16.0] {
        let size = chunk_size_for(level);
        let chunks = chunk(&documents, level);
        assert!(!chunks.is_empty());
        assert_chunk_invariants(&documents[0], &chunks, size);
    }
}

#[test]
fn test_custom_chunker_constants() {
    let chunker = Chunker::new(500, 50, 20).unwrap();

    assert_eq!(chunker.chunk_size_for(1.0), 500);
    assert_eq!(chunker.chunk_size_for(20.0), 50);
    assert_eq!(chunker.window_for(1.0).overlap, 20);
    assert!(Chunker::new(0, 50, 20).is_err());
}

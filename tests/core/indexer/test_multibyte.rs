// Character-based windows over multi-byte UTF-8 content

use crate::common::{assert_chunk_invariants, docs};
use context42::core::indexer::chunker::chunk;

#[test]
fn test_cjk_content_does_not_panic() {
    let content = "日本語のテキスト".repeat(100); // 800 chars, 2400 bytes
    let documents = docs(&[("ja.txt", content.as_str())]);
    let chunks = chunk(&documents, 4.0);

    assert_eq!(documents[0].size, 800);
    assert_chunk_invariants(&documents[0], &chunks, 250);
    assert_eq!(chunks.last().unwrap().end, 800);
}

#[test]
fn test_emoji_offsets_count_chars() {
    let content = "🦀".repeat(300);
    let chunks = chunk(&docs(&[("crab.txt", content.as_str())]), 10.0);

    assert_eq!(chunks[0].content.chars().count(), 100);
    assert_eq!(chunks[1].start, 75);
    assert_eq!(chunks[1].id, "crab.txt_75");
}

#[test]
fn test_mixed_scripts() {
    let content = "abc ñandú Ελληνικά кириллица 中文 ".repeat(40);
    let documents = docs(&[("mixed.txt", content.as_str())]);

    for level in [1.0, 4.0, 16.0] {
        let chunks = chunk(&documents, level);
        assert_chunk_invariants(&documents[0], &chunks, context42::chunk_size_for(level));
    }
}

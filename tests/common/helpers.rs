// Test helper functions

use context42::core::config::Config;
use context42::core::services::Services;
use context42::core::session::Session;
use context42::core::types::{Chunk, Document};
use std::path::Path;

/// Create services with the default configuration
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Services {
    Services::new(Config::default()).expect("default config is valid")
}

/// Build in-memory documents from (name, content) pairs
#[allow(dead_code)] // Used in integration tests
pub fn docs(items: &[(&str, &str)]) -> Vec<Document> {
    items.iter().map(|(n, c)| Document::new(*n, *c)).collect()
}

/// Load a directory into a fresh session and chunk it at `level`
#[allow(dead_code)] // Used in integration tests
pub async fn load_session(services: &Services, root: &Path, level: f64) -> Session {
    let mut session = Session::new();
    services
        .load_into(&mut session, root, vec![], vec![])
        .await
        .expect("Failed to load test directory");
    session.rechunk(&services.chunker, level);
    session
}

/// Check the structural chunk invariants for one document
#[allow(dead_code)] // Used in integration tests
pub fn assert_chunk_invariants(doc: &Document, chunks: &[Chunk], chunk_size: usize) {
    let chars: Vec<char> = doc.content.chars().collect();
    let mut last_start = None;
    for c in chunks.iter().filter(|c| c.document_name == doc.name) {
        assert!(
            c.start < c.end && c.end <= doc.size,
            "bad bounds {}..{} for {} chars",
            c.start,
            c.end,
            doc.size
        );
        assert!(
            c.end - c.start <= chunk_size,
            "window {}..{} wider than {}",
            c.start,
            c.end,
            chunk_size
        );
        assert_eq!(c.id, format!("{}_{}", doc.name, c.start));
        assert!(!c.content.trim().is_empty());
        let window: String = chars[c.start..c.end].iter().collect();
        assert_eq!(c.content, window, "content of {} is not its window", c.id);
        if let Some(prev) = last_start {
            assert!(c.start > prev, "starts must increase");
        }
        last_start = Some(c.start);
    }
}

//! Term-frequency keyword search.
//!
//! A chunk's score is the sum, over the query's whitespace-separated
//! terms, of how often the term occurs in the lower-cased chunk
//! (non-overlapping, left to right) times the term's length. Chunks
//! with no hits are dropped, the rest are stably sorted by score so
//! equal scores keep the chunk order they came in with.

use crate::core::types::{Chunk, ScoredChunk};

/// Preview length in characters
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Appended to previews of content longer than the preview length
pub const PREVIEW_MARKER: &str = "...";

/// Keyword search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    preview_chars: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl SearchEngine {
    /// Create an engine with the default preview length
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom preview length
    pub fn with_preview_chars(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    /// Score `chunks` against `query` and return at most `top_k`
    /// matches, best first.
    ///
    /// An empty or all-whitespace query matches nothing, as does
    /// `top_k == 0`.
    pub fn search(&self, chunks: &[Chunk], query: &str, top_k: usize) -> Vec<ScoredChunk> {
        let terms = tokenize(query);
        if terms.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(u64, &Chunk)> = chunks
            .iter()
            .filter_map(|chunk| {
                let score = score_content(&chunk.content, &terms);
                (score > 0).then_some((score, chunk))
            })
            .collect();

        // sort_by is stable: ties stay in input order
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(top_k);

        tracing::debug!(
            "Query {:?} matched {} of {} chunks",
            query,
            scored.len(),
            chunks.len()
        );

        scored
            .into_iter()
            .map(|(score, chunk)| ScoredChunk {
                preview: self.preview(&chunk.content),
                chunk: chunk.clone(),
                score,
            })
            .collect()
    }

    /// First `preview_chars` characters, marked when truncated.
    pub fn preview(&self, content: &str) -> String {
        match content.char_indices().nth(self.preview_chars) {
            Some((cut, _)) => format!("{}{}", &content[..cut], PREVIEW_MARKER),
            None => content.to_string(),
        }
    }
}

/// Lower-case a query and split it on whitespace.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Non-overlapping occurrences of `term` in `haystack`.
pub fn count_occurrences(haystack: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    haystack.matches(term).count()
}

/// Score one chunk's content against already-tokenized terms.
pub fn score_content(content: &str, terms: &[String]) -> u64 {
    let lowered = content.to_lowercase();
    terms
        .iter()
        .map(|term| (count_occurrences(&lowered, term) * term.chars().count()) as u64)
        .sum()
}

/// Search with the default engine.
pub fn search(chunks: &[Chunk], query: &str, top_k: usize) -> Vec<ScoredChunk> {
    SearchEngine::default().search(chunks, query, top_k)
}

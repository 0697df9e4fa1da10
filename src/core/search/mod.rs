//! Keyword search over chunks.
//!
//! Scores chunks by term frequency weighted by term length and
//! returns the top-K matches.

mod keyword;

pub use keyword::{
    count_occurrences, score_content, search, tokenize, SearchEngine, DEFAULT_PREVIEW_CHARS,
    PREVIEW_MARKER,
};

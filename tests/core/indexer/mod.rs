// Indexer integration tests

mod test_chunking;
mod test_loading;
mod test_multibyte;

// Test helper functions

use mdindex::core::config::Config;
use mdindex::core::indexer::Segmenter;
use mdindex::core::services::Services;
use mdindex::core::sink::MemoryIndexSink;
use std::path::Path;
use std::sync::Arc;

/// Create services reading from `docs_dir`, writing to `output`, and
/// uploading into the returned in-memory sink
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(docs_dir: &Path, output: &Path) -> (Arc<Services>, Arc<MemoryIndexSink>) {
    let mut config = Config::default();
    config.source.docs_dir = docs_dir.to_path_buf();
    config.output.path = output.to_path_buf();

    let sink = Arc::new(MemoryIndexSink::new("test-docs"));
    let services = Services::new(config).with_sink(sink.clone());
    (Arc::new(services), sink)
}

/// Segment `text` and return only the chunk texts
#[allow(dead_code)] // Used in integration tests
pub fn segment_texts(text: &str) -> Vec<String> {
    Segmenter::new()
        .segments(text, "test.md")
        .map(|c| c.text)
        .collect()
}

/// Rebuild a document from its chunks by reinserting the separators
#[allow(dead_code)] // Used in integration tests
pub fn reconstruct(text: &str) -> String {
    let mut rebuilt = String::new();
    let mut cursor = 0;
    for chunk in Segmenter::new().segments(text, "test.md") {
        rebuilt.push_str(&text[cursor..chunk.start_offset]);
        rebuilt.push_str(&chunk.text);
        cursor = chunk.end_offset;
    }
    rebuilt.push_str(&text[cursor..]);
    rebuilt
}

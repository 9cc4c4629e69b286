//! Tests for the chunk CLI command

use crate::common::{create_test_services, DocsDir};
use mdindex::cli::commands::chunk::{execute, ChunkArgs};
use mdindex::cli::OutputFormat;
use mdindex::core::indexer::read_records;

#[tokio::test]
async fn test_chunk_named_document() {
    let docs = DocsDir::site();
    let output = docs.output_path("output.json");
    let (services, _sink) = create_test_services(docs.path(), &output);

    let args = ChunkArgs {
        document: Some("about".to_string()),
        ..ChunkArgs::default()
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "chunk should succeed: {:?}", result.err());

    let records = read_records(&output).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].key, "About us.");
}

#[tokio::test]
async fn test_chunk_json_format_and_overrides() {
    let docs = DocsDir::site();
    let default_output = docs.output_path("output.json");
    let custom_output = docs.output_path("custom.json");
    let (services, _sink) = create_test_services(docs.path(), &default_output);

    let args = ChunkArgs {
        document: Some("wellness".to_string()),
        output: Some(custom_output.clone()),
        key_words: Some(2),
        skip_empty: true,
        minify: true,
        ..ChunkArgs::default()
    };

    execute(args, &services, OutputFormat::Json).await.unwrap();

    assert!(!default_output.exists());
    let raw = std::fs::read_to_string(&custom_output).unwrap();
    // Minified: newlines only appear escaped inside values
    assert!(!raw.contains('\n'));

    let records = read_records(&custom_output).unwrap();
    assert_eq!(records.len(), 8);
    assert!(records.iter().all(|r| r.key.split(' ').count() <= 2));
    assert_eq!(records[1].key, "Sleep at");
}

#[tokio::test]
async fn test_chunk_all_documents() {
    let docs = DocsDir::site();
    let output = docs.output_path("all.json");
    let (services, _sink) = create_test_services(docs.path(), &output);

    let args = ChunkArgs {
        all: true,
        ..ChunkArgs::default()
    };

    execute(args, &services, OutputFormat::Human).await.unwrap();
    assert_eq!(read_records(&output).unwrap().len(), 11);
}

#[tokio::test]
async fn test_chunk_requires_document() {
    let docs = DocsDir::site();
    let output = docs.output_path("output.json");
    let (services, _sink) = create_test_services(docs.path(), &output);

    let result = execute(ChunkArgs::default(), &services, OutputFormat::Human).await;
    let err = result.unwrap_err().to_string();
    assert!(err.contains("No document given"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_chunk_missing_document() {
    let docs = DocsDir::site();
    let output = docs.output_path("output.json");
    let (services, _sink) = create_test_services(docs.path(), &output);

    let args = ChunkArgs {
        document: Some("nope".to_string()),
        ..ChunkArgs::default()
    };

    let err = execute(args, &services, OutputFormat::Human).await.unwrap_err();
    assert!(err.to_string().contains("nope"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_chunk_rejects_zero_key_words() {
    let docs = DocsDir::site();
    let output = docs.output_path("output.json");
    let (services, _sink) = create_test_services(docs.path(), &output);

    let args = ChunkArgs {
        document: Some("about".to_string()),
        key_words: Some(0),
        ..ChunkArgs::default()
    };

    assert!(execute(args, &services, OutputFormat::Human).await.is_err());
    assert!(!output.exists());
}

// Bulk upload of chunked records to a mock index service

use std::time::Duration;

use mdindex::core::indexer::ChunkPipeline;
use mdindex::core::sink::{HttpIndexSink, IndexUploader};
use mdindex::{Document, MdIndexError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn sink(uri: &str) -> HttpIndexSink {
    HttpIndexSink::new(uri, "APP", "write-key", "app-docs", Duration::from_secs(5))
        .expect("sink should build")
}

#[tokio::test]
async fn test_chunked_document_uploaded_in_one_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/indexes/app-docs/objects"))
        .and(header("x-api-key", "write-key"))
        .respond_with(|req: &Request| {
            let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
            let count = body["objects"].as_array().map(Vec::len).unwrap_or(0);
            let ids: Vec<String> = (0..count).map(|i| format!("id-{i}")).collect();
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "objectIDs": ids }))
        })
        .expect(1)
        .mount(&server)
        .await;

    let doc = Document::new("intro", "Hello world. This is a test! Is it working?");
    let (records, _) = ChunkPipeline::default().chunk(&doc);

    let sink = sink(&server.uri());
    let report = IndexUploader::new(&sink).upload(&records).await.unwrap();

    assert_eq!(report.index_name, "app-docs");
    assert_eq!(report.records_sent, 3);
    assert_eq!(report.object_ids, vec!["id-0", "id-1", "id-2"]);

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "objects": [
                {"Hello world.": "Hello world."},
                {"This is a test!": "This is a test!"},
                {"Is it working?": "Is it working?"}
            ]
        })
    );
}

#[tokio::test]
async fn test_auth_failure_is_fatal_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("{\"message\":\"Invalid API key\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let doc = Document::new("intro", "One. Two.");
    let (records, _) = ChunkPipeline::default().chunk(&doc);

    let sink = sink(&server.uri());
    let err = IndexUploader::new(&sink)
        .with_max_retries(3)
        .upload(&records)
        .await
        .unwrap_err();

    assert!(matches!(err, MdIndexError::UploadStatus { status: 403, .. }));
    assert!(err.message().contains("Invalid API key"));
}

#[tokio::test]
async fn test_transient_failure_retried_when_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"objectIDs": ["a", "b"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let doc = Document::new("intro", "One. Two.");
    let (records, _) = ChunkPipeline::default().chunk(&doc);

    let sink = sink(&server.uri());
    let report = IndexUploader::new(&sink)
        .with_max_retries(1)
        .upload(&records)
        .await
        .unwrap();

    assert_eq!(report.attempts, 2);
    assert_eq!(report.object_ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_unreachable_index_fails_run() {
    // Nothing listens on the discard port
    let sink = sink("http://127.0.0.1:9");
    let doc = Document::new("intro", "One.");
    let (records, _) = ChunkPipeline::default().chunk(&doc);

    let err = IndexUploader::new(&sink).upload(&records).await.unwrap_err();
    assert!(err.is_upload_error());
}

//! Index sinks and the bulk uploader.
//!
//! A sink takes the full, ordered record list and upserts it into a
//! remote search index in one call. The uploader wraps a sink with the
//! run semantics: one batch, all or nothing.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::core::config::IndexConfig;
use crate::core::error::{MdIndexError, Result};
use crate::core::types::{Record, UploadReport};

/// Bulk-upsert target
#[async_trait]
pub trait IndexSink: Send + Sync {
    /// Name of the index records land in
    fn index_name(&self) -> &str;

    /// Upsert every record in one call; returns the generated ids
    async fn save_objects(&self, records: &[Record]) -> Result<Vec<String>>;
}

#[derive(Serialize)]
struct SaveObjectsRequest<'a> {
    objects: &'a [Record],
}

#[derive(Debug, Deserialize)]
struct SaveObjectsResponse {
    #[serde(rename = "objectIDs", default)]
    object_ids: Vec<String>,
}

/// Sink backed by a hosted index's HTTP bulk endpoint.
///
/// Sends `POST {endpoint}/indexes/{index}/objects` with body
/// `{"objects": [...]}` and expects `{"objectIDs": [...]}` back. The
/// index name is percent-encoded as a single path segment.
#[derive(Debug, Clone)]
pub struct HttpIndexSink {
    client: Client,
    objects_url: Url,
    index_name: String,
}

impl HttpIndexSink {
    pub fn new(
        endpoint: &str,
        application_id: &str,
        api_key: &str,
        index_name: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let base = Url::parse(endpoint.trim()).map_err(|e| {
            MdIndexError::ConfigError(format!("Invalid index endpoint '{endpoint}': {e}"))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(MdIndexError::ConfigError(format!(
                "Index endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }
        if index_name.trim().is_empty() {
            return Err(MdIndexError::ConfigError(
                "Index name cannot be empty".to_string(),
            ));
        }
        let objects_url = objects_url(base, index_name)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-application-id",
            HeaderValue::from_str(application_id.trim())
                .map_err(|e| MdIndexError::ConfigError(format!("Invalid application id: {e}")))?,
        );
        let mut key = HeaderValue::from_str(api_key.trim())
            .map_err(|e| MdIndexError::ConfigError(format!("Invalid API key: {e}")))?;
        key.set_sensitive(true);
        headers.insert("x-api-key", key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            objects_url,
            index_name: index_name.to_string(),
        })
    }

    /// Build a sink from the `[index]` config section.
    ///
    /// Fails when any credential is missing.
    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        let endpoint = required(&config.endpoint, "index.endpoint")?;
        let application_id = required(&config.application_id, "index.application_id")?;
        let api_key = required(&config.api_key, "index.api_key")?;
        let index_name = required(&config.index_name, "index.index_name")?;

        Self::new(
            endpoint,
            application_id,
            api_key,
            index_name,
            Duration::from_secs(config.timeout_sec),
        )
    }

    /// Fully built bulk endpoint for this index
    pub fn objects_url(&self) -> &Url {
        &self.objects_url
    }
}

fn objects_url(mut base: Url, index_name: &str) -> Result<Url> {
    base.set_query(None);
    base.set_fragment(None);
    base.path_segments_mut()
        .map_err(|_| MdIndexError::ConfigError("Index endpoint cannot be used as a base URL".to_string()))?
        .pop_if_empty()
        .extend(["indexes", index_name, "objects"]);
    Ok(base)
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| MdIndexError::ConfigError(format!("Missing required setting '{name}'")))
}

#[async_trait]
impl IndexSink for HttpIndexSink {
    fn index_name(&self) -> &str {
        &self.index_name
    }

    async fn save_objects(&self, records: &[Record]) -> Result<Vec<String>> {
        let url = self.objects_url.clone();
        tracing::debug!("POST {} ({} records)", url, records.len());

        let response = self
            .client
            .post(url)
            .json(&SaveObjectsRequest { objects: records })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(MdIndexError::UploadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SaveObjectsResponse = response
            .json()
            .await
            .map_err(|e| MdIndexError::Upload(format!("Failed to parse index response: {e}")))?;

        Ok(payload.object_ids)
    }
}

/// Sink that keeps every batch in memory
#[derive(Debug, Default)]
pub struct MemoryIndexSink {
    index_name: String,
    batches: Mutex<Vec<Vec<Record>>>,
}

impl MemoryIndexSink {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            batches: Mutex::new(Vec::new()),
        }
    }

    /// Every batch received so far, in call order
    pub fn batches(&self) -> Vec<Vec<Record>> {
        self.batches
            .lock()
            .map(|b| b.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl IndexSink for MemoryIndexSink {
    fn index_name(&self) -> &str {
        &self.index_name
    }

    async fn save_objects(&self, records: &[Record]) -> Result<Vec<String>> {
        let mut batches = self
            .batches
            .lock()
            .map_err(|_| MdIndexError::Upload("memory sink lock poisoned".to_string()))?;
        let offset: usize = batches.iter().map(Vec::len).sum();
        batches.push(records.to_vec());

        Ok((offset..offset + records.len())
            .map(|i| format!("obj-{i}"))
            .collect())
    }
}

/// Sends the whole record list to a sink as one batch.
///
/// With `max_retries == 0` (the default) a failed call fails the run.
/// Retries re-send the complete batch and only follow retryable
/// failures (transport errors, 429, 5xx).
pub struct IndexUploader<'a> {
    sink: &'a dyn IndexSink,
    max_retries: usize,
}

impl<'a> IndexUploader<'a> {
    pub fn new(sink: &'a dyn IndexSink) -> Self {
        Self {
            sink,
            max_retries: 0,
        }
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub async fn upload(&self, records: &[Record]) -> Result<UploadReport> {
        let index_name = self.sink.index_name().to_string();

        if records.is_empty() {
            tracing::info!("No records to upload to '{}'", index_name);
            return Ok(UploadReport {
                index_name,
                records_sent: 0,
                object_ids: Vec::new(),
                attempts: 0,
                completed_at: Utc::now(),
            });
        }

        let start = Instant::now();
        let mut attempt = 0usize;
        loop {
            attempt += 1;
            match self.sink.save_objects(records).await {
                Ok(object_ids) => {
                    tracing::info!(
                        "Uploaded {} records to '{}' in {}ms",
                        records.len(),
                        index_name,
                        start.elapsed().as_millis()
                    );
                    return Ok(UploadReport {
                        index_name,
                        records_sent: records.len(),
                        object_ids,
                        attempts: attempt,
                        completed_at: Utc::now(),
                    });
                }
                Err(e) if e.is_retryable() && attempt <= self.max_retries => {
                    let delay = retry_backoff(attempt);
                    tracing::warn!(
                        "Upload attempt {} failed: {}. Retrying in {}ms",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!("Upload to '{}' failed: {}", index_name, e);
                    return Err(e);
                }
            }
        }
    }
}

/// 250ms after the first failed attempt, doubling up to 4s
fn retry_backoff(attempt: usize) -> Duration {
    let exponent = attempt.clamp(1, 5) as u32 - 1;
    Duration::from_millis(250 * (1 << exponent))
}

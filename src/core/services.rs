//! Unified service container for mdindex
//!
//! Wires configuration to the document source, chunking pipeline and
//! index sink.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::{ChunkPipeline, EmptyChunkPolicy, RecordBuilder};
use crate::core::sink::{HttpIndexSink, IndexSink, IndexUploader};
use crate::core::source::{DocumentSource, FsSource};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Where documents are read from
    pub source: Arc<dyn DocumentSource>,

    /// Application configuration
    pub config: Arc<Config>,

    /// Sink override; when unset one is built from `config.index`
    sink: Option<Arc<dyn IndexSink>>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let source = Arc::new(FsSource::new(config.source.docs_dir.clone()));

        Self {
            source,
            config: Arc::new(config),
            sink: None,
        }
    }

    /// Replace the document source
    pub fn with_source(mut self, source: Arc<dyn DocumentSource>) -> Self {
        self.source = source;
        self
    }

    /// Replace the index sink
    pub fn with_sink(mut self, sink: Arc<dyn IndexSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Create a pipeline from the chunking config
    ///
    /// Pipelines are created per command since the CLI can override
    /// the key length and blank-chunk policy.
    pub fn create_pipeline(
        &self,
        key_words: Option<usize>,
        empty_chunks: Option<EmptyChunkPolicy>,
    ) -> ChunkPipeline {
        let chunking = &self.config.chunking;
        ChunkPipeline::new(RecordBuilder::new(
            key_words.unwrap_or(chunking.key_words),
            empty_chunks.unwrap_or(chunking.empty_chunks),
        ))
    }

    /// The configured index sink.
    ///
    /// Fails when no override is set and index credentials are missing.
    pub fn sink(&self) -> Result<Arc<dyn IndexSink>> {
        match &self.sink {
            Some(sink) => Ok(Arc::clone(sink)),
            None => Ok(Arc::new(HttpIndexSink::from_config(&self.config.index)?)),
        }
    }

    /// Uploader over `sink` using the configured retry budget
    pub fn uploader<'a>(&self, sink: &'a dyn IndexSink) -> IndexUploader<'a> {
        IndexUploader::new(sink).with_max_retries(self.config.index.max_retries)
    }
}

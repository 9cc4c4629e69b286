//! Chunking pipeline orchestration.
//!
//! Coordinates the end-to-end chunking workflow:
//! 1. Read the document from a source
//! 2. Segment it into chunks
//! 3. Build one record per chunk
//! 4. Serialize the record list to the output file

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::error::{MdIndexError, Result};
use crate::core::indexer::{RecordBuilder, Segmenter};
use crate::core::source::DocumentSource;
use crate::core::types::{ChunkStats, Document, Record};

/// Turns documents into records
#[derive(Debug, Clone, Default)]
pub struct ChunkPipeline {
    segmenter: Segmenter,
    builder: RecordBuilder,
}

impl ChunkPipeline {
    pub fn new(builder: RecordBuilder) -> Self {
        Self {
            segmenter: Segmenter::new(),
            builder,
        }
    }

    /// Chunk an already-loaded document
    pub fn chunk(&self, document: &Document) -> (Vec<Record>, ChunkStats) {
        let start = Instant::now();

        let mut chunks_created = 0;
        let chunks = self
            .segmenter
            .segments(&document.text, &document.name)
            .inspect(|_| chunks_created += 1);
        let (records, chunks_skipped) = self.builder.build_all(chunks);

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            "Chunked {:?}: {} chunks, {} records, {} skipped",
            document.name,
            chunks_created,
            records.len(),
            chunks_skipped
        );

        let stats = ChunkStats {
            documents: vec![document.name.clone()],
            chunks_created,
            records_created: records.len(),
            chunks_skipped,
            duration_ms,
        };

        (records, stats)
    }

    /// Read a document from `source` and chunk it
    pub fn chunk_document(
        &self,
        source: &dyn DocumentSource,
        name: &str,
    ) -> Result<(Vec<Record>, ChunkStats)> {
        let document = source.read(name)?;
        tracing::info!(
            "Read document {:?} ({} bytes)",
            document.name,
            document.text.len()
        );
        Ok(self.chunk(&document))
    }

    /// Chunk every document the source lists, in listing order.
    ///
    /// Records from all documents are concatenated. Any unreadable
    /// document aborts the whole run.
    pub fn chunk_all(&self, source: &dyn DocumentSource) -> Result<(Vec<Record>, ChunkStats)> {
        let names = source.list()?;
        tracing::info!("Found {} documents to chunk", names.len());

        let mut all_records = Vec::new();
        let mut total = ChunkStats::default();

        for name in &names {
            let (records, stats) = self.chunk_document(source, name)?;
            all_records.extend(records);
            total.merge(stats);
        }

        tracing::info!(
            "Chunking complete: {} documents, {} chunks, {} records",
            total.documents.len(),
            total.chunks_created,
            total.records_created
        );

        Ok((all_records, total))
    }
}

/// Encode records as a JSON array of single-key objects.
pub fn encode_records(records: &[Record], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Write records to `path`.
///
/// The whole list is encoded before the file is opened, so an encoding
/// failure leaves any existing file untouched.
pub fn write_records(records: &[Record], path: &Path, pretty: bool) -> Result<()> {
    let json = encode_records(records, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;

    tracing::info!("Saved {:?} ({} records)", path, records.len());
    Ok(())
}

/// Load a record list previously written by [`write_records`]
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path).map_err(|source| MdIndexError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Record> = serde_json::from_str(&contents)?;
    Ok(records)
}

//! Core data types for mdindex.
//!
//! Documents come in, chunks are cut from them, and each chunk
//! becomes one record destined for the search index.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A raw document as read from a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Source name (slug or path) the text was read from
    pub name: String,

    /// Full UTF-8 text, never modified after reading
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A sentence-like segment of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text, untrimmed
    pub text: String,

    /// Name of the document this chunk was cut from
    pub source: String,

    /// Byte offset where chunk starts in the document
    pub start_offset: usize,

    /// Byte offset where chunk ends in the document
    pub end_offset: usize,

    /// Sequential chunk number within the document
    pub chunk_index: usize,
}

impl Chunk {
    /// True for chunks that are empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One search record: derived key mapped to the full chunk text.
///
/// Serialized as a single-entry JSON object, `{"<key>": "<value>"}`.
/// Keys are not unique across records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with exactly one string entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Record, A::Error> {
                let (key, value): (String, String) = map
                    .next_entry()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;

                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom("record has more than one entry"));
                }

                Ok(Record { key, value })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Statistics from chunking one or more documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkStats {
    /// Documents processed
    pub documents: Vec<String>,

    /// Chunks produced by segmentation
    pub chunks_created: usize,

    /// Records emitted
    pub records_created: usize,

    /// Blank chunks dropped by the skip policy
    pub chunks_skipped: usize,

    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ChunkStats {
    /// Fold another document's stats into this one
    pub fn merge(&mut self, other: ChunkStats) {
        self.documents.extend(other.documents);
        self.chunks_created += other.chunks_created;
        self.records_created += other.records_created;
        self.chunks_skipped += other.chunks_skipped;
        self.duration_ms += other.duration_ms;
    }
}

/// Outcome of a bulk upsert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReport {
    /// Target index
    pub index_name: String,

    /// Number of records sent in the batch
    pub records_sent: usize,

    /// Identifiers generated by the index, in record order
    pub object_ids: Vec<String>,

    /// Attempts made (1 unless retries were configured)
    pub attempts: usize,

    /// When the upload finished
    pub completed_at: DateTime<Utc>,
}

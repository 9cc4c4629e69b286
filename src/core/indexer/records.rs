//! Chunk to record mapping.

use serde::{Deserialize, Serialize};

use crate::core::indexer::key::{derive_key, DEFAULT_KEY_WORDS};
use crate::core::types::{Chunk, Record};

/// What to do with chunks that are empty or whitespace-only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyChunkPolicy {
    /// Emit a record for every chunk (one record per chunk)
    #[default]
    Keep,
    /// Drop blank chunks before key derivation
    Skip,
}

/// Builds one record per chunk.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    key_words: usize,
    empty_chunks: EmptyChunkPolicy,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_WORDS, EmptyChunkPolicy::Keep)
    }
}

impl RecordBuilder {
    pub fn new(key_words: usize, empty_chunks: EmptyChunkPolicy) -> Self {
        Self {
            key_words,
            empty_chunks,
        }
    }

    /// Map a single chunk to its record
    pub fn build(&self, chunk: &Chunk) -> Record {
        Record {
            key: derive_key(&chunk.text, self.key_words),
            value: chunk.text.clone(),
        }
    }

    /// Map chunks to records in order.
    ///
    /// Returns the records and the number of chunks dropped by the
    /// policy (always 0 under [`EmptyChunkPolicy::Keep`]).
    pub fn build_all<I>(&self, chunks: I) -> (Vec<Record>, usize)
    where
        I: IntoIterator<Item = Chunk>,
    {
        let mut records = Vec::new();
        let mut skipped = 0;

        for chunk in chunks {
            if self.empty_chunks == EmptyChunkPolicy::Skip && chunk.is_blank() {
                tracing::debug!(
                    "Skipping blank chunk {} of {}",
                    chunk.chunk_index,
                    chunk.source
                );
                skipped += 1;
                continue;
            }
            records.push(self.build(&chunk));
        }

        (records, skipped)
    }
}

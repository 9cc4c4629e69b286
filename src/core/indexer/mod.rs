//! Document chunking module.
//!
//! Turns markdown documents into search records:
//!
//! - Sentence-boundary segmentation (lazy, lossless up to separators)
//! - Record keys from the leading words of each chunk
//! - Configurable handling of blank chunks
//! - Pipeline orchestration and output file encoding

pub mod key;
pub mod pipeline;
pub mod records;
pub mod segmenter;

pub use key::{derive_key, DEFAULT_KEY_WORDS};
pub use pipeline::{encode_records, read_records, write_records, ChunkPipeline};
pub use records::{EmptyChunkPolicy, RecordBuilder};
pub use segmenter::{Segmenter, Segments};

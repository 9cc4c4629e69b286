//! mdindex - Markdown chunking for hosted search indexes
//!
//! Reads a documentation page, cuts it into sentence-like chunks,
//! keys each chunk by its leading words and bulk-upserts the
//! resulting records into a remote search index.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - indexer (segmentation, keys, records, pipeline)
//!   - source (where documents come from)
//!   - sink (where records go)
//!   - services (unified service container)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use mdindex::core::indexer::ChunkPipeline;
//! use mdindex::Document;
//!
//! let doc = Document::new("intro", "Hello world. This is a test! Is it working?");
//! let (records, stats) = ChunkPipeline::default().chunk(&doc);
//!
//! assert_eq!(stats.chunks_created, 3);
//! assert_eq!(records[1].key, "This is a test!");
//! ```

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{MdIndexError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;

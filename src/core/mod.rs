//! Core domain logic (protocol-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Documents, chunks, records
//! - **xdg**: XDG directory handling
//! - **indexer**: Segmentation, key derivation, record building
//! - **source**: Document sources
//! - **sink**: Index sinks and the bulk uploader
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod services;
pub mod sink;
pub mod source;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{MdIndexError, Result};
pub use services::Services;

//! Error types and error handling for mdindex.
//!
//! Every error is terminal for a run: reading the document, encoding
//! the records and the bulk upload either succeed completely or abort.
//! Adapters (the CLI) decide how to present them.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for mdindex operations
pub type Result<T> = std::result::Result<T, MdIndexError>;

/// Main error type for mdindex
#[derive(Error, Debug)]
pub enum MdIndexError {
    #[error("Failed to read document {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Upload rejected with status {status}: {body}")]
    UploadStatus { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl MdIndexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the error came from reading the document source
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            MdIndexError::SourceRead { .. }
                | MdIndexError::DocumentNotFound(_)
                | MdIndexError::InvalidDocument(_)
        )
    }

    /// Check if the error came from the bulk upload
    pub fn is_upload_error(&self) -> bool {
        matches!(
            self,
            MdIndexError::Upload(_) | MdIndexError::UploadStatus { .. } | MdIndexError::Http(_)
        )
    }

    /// Check if re-sending the same batch could succeed
    ///
    /// Only transport failures, throttling (429) and server errors (5xx)
    /// qualify. Auth and payload rejections never do.
    pub fn is_retryable(&self) -> bool {
        match self {
            MdIndexError::UploadStatus { status, .. } => *status == 429 || *status >= 500,
            MdIndexError::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}

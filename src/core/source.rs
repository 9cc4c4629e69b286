//! Document sources.
//!
//! A source hands out raw document text by name. Names are either a
//! path to a file or a slug: the stem of a `.md` file inside the docs
//! directory, the same naming the site uses for its page routes.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::error::{MdIndexError, Result};
use crate::core::types::Document;

/// Read-only provider of document text
pub trait DocumentSource: Send + Sync {
    /// Read the full text of the named document
    fn read(&self, name: &str) -> Result<Document>;

    /// List every document name this source can serve, sorted
    fn list(&self) -> Result<Vec<String>>;
}

/// Markdown documents on the local filesystem
#[derive(Debug, Clone)]
pub struct FsSource {
    docs_dir: PathBuf,
}

impl FsSource {
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
        }
    }

    /// Resolve a name to a file path.
    ///
    /// Tried in order: the name as a path, `docs_dir/<name>`,
    /// then `docs_dir/<name>.md`. When none is a file the error is a
    /// `NotFound` read failure on the last candidate, listing every path
    /// tried.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.trim().is_empty() {
            return Err(MdIndexError::InvalidDocument(
                "Document name cannot be empty".to_string(),
            ));
        }

        let candidates = [
            PathBuf::from(name),
            self.docs_dir.join(name),
            self.docs_dir.join(format!("{name}.md")),
        ];

        if let Some(found) = candidates.iter().find(|p| p.is_file()) {
            return Ok(found.clone());
        }

        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let [_, _, slug_path] = candidates;
        Err(MdIndexError::SourceRead {
            path: slug_path,
            source: io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document file found (tried {tried})"),
            ),
        })
    }
}

impl DocumentSource for FsSource {
    fn read(&self, name: &str) -> Result<Document> {
        let path = self.resolve(name)?;
        tracing::debug!("Reading document {:?} from {:?}", name, path);

        let text = fs::read_to_string(&path).map_err(|source| MdIndexError::SourceRead {
            path: path.clone(),
            source,
        })?;

        Ok(Document::new(name, text))
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.docs_dir).map_err(|source| MdIndexError::SourceRead {
            path: self.docs_dir.clone(),
            source,
        })?;

        let mut slugs = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                slugs.push(stem.to_string());
            }
        }

        slugs.sort();
        Ok(slugs)
    }
}

/// In-memory documents keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(name.into(), text.into());
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, name: &str) -> Result<Document> {
        self.documents
            .get(name)
            .map(|text| Document::new(name, text.clone()))
            .ok_or_else(|| MdIndexError::DocumentNotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.documents.keys().cloned().collect())
    }
}

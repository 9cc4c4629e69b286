//! Sentence-boundary segmentation.
//!
//! Splits a document at every sentence-terminal mark (`.`, `!`, `?`)
//! that is followed by whitespace. The mark stays on the preceding
//! chunk and the whitespace run is dropped as the separator.
//!
//! This is deliberately a plain boundary rule, not sentence detection:
//! "e.g. this" splits after "e.g." and "3. 14" splits after "3.".
//! Existing indexes depend on this exact behaviour.
//!
//! # Example
//!
//! ```
//! use mdindex::core::indexer::Segmenter;
//!
//! let segmenter = Segmenter::new();
//! let texts: Vec<String> = segmenter
//!     .segments("Hello world. This is a test! Is it working?", "doc")
//!     .map(|c| c.text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["Hello world.", "This is a test!", "Is it working?"]);
//! ```

use once_cell::sync::Lazy;
use regex::{Matches, Regex};

use crate::core::types::Chunk;

/// Terminal mark followed by a whitespace run
static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("boundary pattern is a valid regex"));

/// Stateless sentence-boundary segmenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Lazily segment `text` into chunks tagged with `source`.
    ///
    /// Each call returns a fresh iterator starting at the beginning of
    /// the text. An empty text yields nothing; a text with no boundary
    /// yields one chunk equal to the whole text. A text ending in a
    /// boundary yields a trailing empty chunk.
    pub fn segments<'a>(&self, text: &'a str, source: &'a str) -> Segments<'a> {
        Segments {
            text,
            source,
            boundaries: BOUNDARY.find_iter(text),
            position: 0,
            chunk_index: 0,
            finished: text.is_empty(),
        }
    }

    /// Collect all chunks of `text` eagerly.
    pub fn chunk_text(&self, text: &str, source: &str) -> Vec<Chunk> {
        self.segments(text, source).collect()
    }
}

/// Iterator over the chunks of one document.
pub struct Segments<'a> {
    text: &'a str,
    source: &'a str,
    boundaries: Matches<'static, 'a>,
    position: usize,
    chunk_index: usize,
    finished: bool,
}

impl Segments<'_> {
    fn emit(&mut self, start: usize, end: usize) -> Chunk {
        let chunk = Chunk {
            text: self.text[start..end].to_string(),
            source: self.source.to_string(),
            start_offset: start,
            end_offset: end,
            chunk_index: self.chunk_index,
        };
        self.chunk_index += 1;
        chunk
    }
}

impl Iterator for Segments<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.finished {
            return None;
        }

        match self.boundaries.next() {
            Some(boundary) => {
                // Terminal marks are single-byte ASCII
                let end = boundary.start() + 1;
                let start = self.position;
                self.position = boundary.end();
                Some(self.emit(start, end))
            }
            None => {
                self.finished = true;
                let start = self.position;
                Some(self.emit(start, self.text.len()))
            }
        }
    }
}

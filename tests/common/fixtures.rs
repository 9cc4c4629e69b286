// Test fixtures: markdown documentation pages on disk

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A realistic documentation page with front matter, headings, lists
/// and a trailing newline
#[allow(dead_code)] // Used in integration tests
pub const WELLNESS_MD: &str = "---\ntitle: Wellness basics\n---\n\n# Wellness basics\n\nDrink water every day. Sleep at least seven hours!\n\n## Why?\n\nRest helps recovery, e.g. after exercise. Do you track it?\n\n- Walk 30 min.\n- Stretch 5.5 min daily.\n";

/// Docs directory fixture
#[allow(dead_code)] // Used in integration tests
pub struct DocsDir {
    pub dir: TempDir,
}

impl DocsDir {
    /// Create a docs directory holding the given (file name, content) pairs
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directories");
            }
            std::fs::write(&path, content).expect("Failed to write file");
        }
        Self { dir }
    }

    /// The standard site: two pages and a non-markdown asset
    #[allow(dead_code)] // Used in integration tests
    pub fn site() -> Self {
        Self::with_files(&[
            ("wellness.md", WELLNESS_MD),
            ("about.md", "About us. We write docs."),
            ("logo.svg", "<svg/>"),
        ])
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path for an output file inside the fixture directory
    #[allow(dead_code)] // Used in integration tests
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join("out").join(name)
    }
}

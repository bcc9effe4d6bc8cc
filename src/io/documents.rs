//! Document acquisition from a directory of cached text files.

use crate::core::Document;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A source of `(identifier, raw_text)` pairs for a batch run.
pub trait DocumentSource {
    fn documents(&self) -> Result<Vec<Document>>;
}

/// Reads every `.txt` file directly under a directory, in lexicographic
/// filename order. The file stem is the document identifier.
///
/// Files are decoded tolerantly; undecodable bytes become replacement
/// characters, which can never form an alphabetic token downstream. A file
/// holding a single space is the placeholder left behind for a document that
/// could not be fetched and flows through as a valid degenerate document.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry =
                entry.with_context(|| format!("failed to scan {}", self.root.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !path.extension().is_some_and(|ext| ext == "txt") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let bytes =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            documents.push(Document::new(id, String::from_utf8_lossy(&bytes)));
        }
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn yields_txt_files_in_filename_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("B002.txt"), "second").unwrap();
        fs::write(dir.path().join("A001.txt"), "first").unwrap();
        fs::write(dir.path().join("README.md"), "skipped").unwrap();

        let documents = DirectorySource::new(dir.path()).documents().unwrap();
        let ids: Vec<_> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["A001", "B002"]);
        assert_eq!(documents[0].raw_text, "first");
    }

    #[test]
    fn placeholder_files_flow_through() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("G099.txt"), " ").unwrap();

        let documents = DirectorySource::new(dir.path()).documents().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].raw_text, " ");
    }
}

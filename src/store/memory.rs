//! In-memory document store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::DocumentStore;
use crate::error::{CatalogError, Result};

/// Keeps documents in memory; useful for tests and embedding.
///
/// # Example
///
/// ```
/// use exercat::store::{DocumentStore, MemoryStore};
/// use std::path::Path;
///
/// let mut store = MemoryStore::new().with_document("in.json", "{}");
/// store.write(Path::new("out.json"), "[]").unwrap();
/// assert_eq!(store.get("out.json"), Some("[]"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document (builder style).
    pub fn with_document(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.documents.insert(path.into(), content.into());
        self
    }

    /// Get a document's content.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.documents.get(path.as_ref()).map(String::as_str)
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| CatalogError::DocumentNotFound {
                path: path.to_path_buf(),
            })
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.documents
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }
}

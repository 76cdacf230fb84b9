//! Document storage.
//!
//! Every stage reads and writes named JSON documents through the
//! [`DocumentStore`] trait, so the same logic runs against files on disk
//! ([`FileStore`]) or in-memory fixtures ([`MemoryStore`]).

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde_json::Value;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// A key-value store of named text documents.
pub trait DocumentStore {
    /// Read a document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentNotFound` if no document exists at `path`.
    fn read(&self, path: &Path) -> Result<String>;

    /// Write (create or replace) a document.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;

    /// Check whether a document exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a document and parse it as JSON.
    ///
    /// Parse failures are reported as `MalformedDocument` against
    /// `source_name`.
    fn read_json(&self, path: &Path, source_name: &str) -> Result<Value> {
        let content = self.read(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CatalogError::malformed(source_name, format!("invalid JSON: {}", e)))
    }
}

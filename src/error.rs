//! Error types for exercat operations.
//!
//! This module defines [`CatalogError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Document-level problems (unreadable or malformed sources) are errors and
//!   abort the run before anything is written
//! - Record-level problems are [`LoadIssue`](crate::loader::LoadIssue)s, reported
//!   and skipped
//! - Use `anyhow::Error` (via `CatalogError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for exercat operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A source document does not exist in the document store.
    #[error("Document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// A source document is not valid JSON or lacks its top-level key.
    #[error("Malformed document '{source_name}': {message}")]
    MalformedDocument {
        source_name: String,
        message: String,
    },

    /// Relationship references are still dangling after inference.
    #[error("Reconciliation failed: {count} dangling reference(s) remain after inference")]
    ReconciliationFailure { count: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    /// Shorthand for a [`CatalogError::MalformedDocument`].
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for exercat operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

//! exercat - Exercise catalog reconciliation.
//!
//! exercat merges several independently maintained exercise catalogs and a
//! progression/regression graph into one canonical catalog, then fills the
//! gaps with records inferred from exercise ids alone.
//!
//! # Modules
//!
//! - [`catalog`] - Exercise ids, records, the catalog and relationship graph
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`infer`] - Rule tables that synthesize records from ids
//! - [`lint`] - Relationship graph validation
//! - [`loader`] - Source document normalization
//! - [`pipeline`] - Stage orchestration
//! - [`reconcile`] - Precedence merge and coverage analysis
//! - [`store`] - Document storage
//! - [`ui`] - Spinners, tables and terminal output
//!
//! # Example
//!
//! ```
//! use exercat::catalog::{ExerciseId, RelationKind, RelationshipGraph};
//! use exercat::infer::InferenceEngine;
//! use exercat::reconcile::{missing_ids, reconcile};
//!
//! let mut graph = RelationshipGraph::new();
//! let plank = ExerciseId::parse("plank").unwrap();
//! let side_plank = ExerciseId::parse("side-plank").unwrap();
//! graph.add_edge(plank, RelationKind::Progression, side_plank);
//!
//! let mut result = reconcile(&[], &graph);
//! InferenceEngine::new().fill(&mut result.catalog, &result.missing);
//!
//! assert!(missing_ids(&result.catalog, &graph).is_empty());
//! assert_eq!(result.catalog.get("side-plank").unwrap().name, "Side Plank");
//! ```
//!
//! For file-based runs, see [`pipeline::Pipeline`] and the integration tests.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod infer;
pub mod lint;
pub mod loader;
pub mod pipeline;
pub mod reconcile;
pub mod store;
pub mod ui;

pub use error::{CatalogError, Result};

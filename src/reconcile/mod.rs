//! Merging normalized sources into one canonical catalog.
//!
//! Sources are merged in precedence order: the first source seeds the
//! catalog verbatim and each later source only contributes ids that are
//! still absent. The relationship graph then defines the full referenced id
//! space, and whatever is referenced but undefined is the `missing` set
//! handed to inference.
//!
//! # Example
//!
//! ```
//! use exercat::catalog::{ExerciseId, RelationKind, RelationshipGraph};
//! use exercat::reconcile::reconcile;
//!
//! let mut graph = RelationshipGraph::new();
//! let a = ExerciseId::parse("a").unwrap();
//! let b = ExerciseId::parse("b").unwrap();
//! graph.add_edge(a, RelationKind::Progression, b.clone());
//!
//! let result = reconcile(&[], &graph);
//! assert!(result.missing.contains(&b));
//! ```

pub mod merge;
pub mod report;

pub use merge::{merge_missing, MergeStats};
pub use report::{Overlap, ReconcileReport, SourceCount};

use std::collections::BTreeSet;

use crate::catalog::{Catalog, ExerciseId, RelationshipGraph};
use crate::loader::ExerciseSource;

/// Result of reconciling a set of sources.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// The merged catalog, before inference.
    pub catalog: Catalog,
    /// Referenced ids with no record, sorted.
    pub missing: BTreeSet<ExerciseId>,
    /// Coverage analysis.
    pub report: ReconcileReport,
}

/// Merge `sources` (highest precedence first) and compute the missing set.
pub fn reconcile(sources: &[ExerciseSource], graph: &RelationshipGraph) -> Reconciliation {
    let mut catalog = Catalog::new();

    for source in sources {
        let stats = merge_missing(&mut catalog, source.records.clone());
        tracing::debug!(
            "Merged '{}': {} added, {} already present",
            source.name,
            stats.added,
            stats.kept
        );
    }

    let referenced = referenced_ids(&catalog, graph);
    let missing = missing_ids(&catalog, graph);
    let report = ReconcileReport::build(sources, graph, &catalog, &referenced, &missing);

    tracing::info!(
        "Reconciled {} source(s) into {} record(s); {} referenced id(s) missing",
        sources.len(),
        catalog.len(),
        missing.len()
    );

    Reconciliation {
        catalog,
        missing,
        report,
    }
}

/// Every id named anywhere: catalog keys, relationship keys and edge targets.
pub fn referenced_ids(catalog: &Catalog, graph: &RelationshipGraph) -> BTreeSet<ExerciseId> {
    catalog
        .ids()
        .chain(graph.sources())
        .chain(graph.edges().map(|edge| edge.to))
        .cloned()
        .collect()
}

/// Referenced ids that the catalog does not define.
pub fn missing_ids(catalog: &Catalog, graph: &RelationshipGraph) -> BTreeSet<ExerciseId> {
    graph
        .sources()
        .chain(graph.edges().map(|edge| edge.to))
        .filter(|id| !catalog.contains(id.as_str()))
        .cloned()
        .collect()
}

//! Coverage analysis of a reconciliation run.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;

use crate::catalog::{Catalog, ExerciseId, RelationshipGraph};
use crate::loader::ExerciseSource;
use crate::ui::Table;

/// Label used for the relationship document's id set in overlap rows.
pub const RELATIONSHIPS_LABEL: &str = "relationships";

/// Record count of one exercise source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub name: String,
    pub records: usize,
}

/// Overlap between two id sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub left: String,
    pub right: String,
    /// Ids in both sets.
    pub shared: usize,
    /// Ids only in `left`.
    pub only_left: usize,
    /// Ids only in `right`.
    pub only_right: usize,
}

/// Analysis of how the sources cover the referenced id space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub sources: Vec<SourceCount>,
    /// Number of exercises with relationship entries.
    pub relationship_sources: usize,
    /// Every id named by any source, key or edge target.
    pub referenced_total: usize,
    /// Records in the reconciled catalog.
    pub catalog_total: usize,
    /// Pairwise overlaps between every source and the relationship keys.
    pub overlaps: Vec<Overlap>,
    /// Relationship keys that no exercise source defines.
    pub only_in_relationships: Vec<ExerciseId>,
    /// Relationship targets that no exercise source defines.
    pub dangling_targets: Vec<ExerciseId>,
    /// Referenced ids absent from the catalog, sorted.
    pub missing: Vec<ExerciseId>,
}

impl ReconcileReport {
    pub(crate) fn build(
        sources: &[ExerciseSource],
        graph: &RelationshipGraph,
        catalog: &Catalog,
        referenced: &BTreeSet<ExerciseId>,
        missing: &BTreeSet<ExerciseId>,
    ) -> Self {
        let mut sets: Vec<(String, BTreeSet<&ExerciseId>)> = sources
            .iter()
            .map(|s| (s.name.clone(), s.records.ids().collect()))
            .collect();
        sets.push((RELATIONSHIPS_LABEL.to_string(), graph.sources().collect()));

        let mut overlaps = Vec::new();
        for (i, (left, left_ids)) in sets.iter().enumerate() {
            for (right, right_ids) in sets.iter().skip(i + 1) {
                let shared = left_ids.intersection(right_ids).count();
                overlaps.push(Overlap {
                    left: left.clone(),
                    right: right.clone(),
                    shared,
                    only_left: left_ids.len() - shared,
                    only_right: right_ids.len() - shared,
                });
            }
        }

        let only_in_relationships = graph
            .sources()
            .filter(|id| !catalog.contains(id.as_str()))
            .cloned()
            .collect();
        let dangling_targets = graph
            .edges()
            .map(|edge| edge.to)
            .filter(|id| !catalog.contains(id.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            sources: sources
                .iter()
                .map(|s| SourceCount {
                    name: s.name.clone(),
                    records: s.records.len(),
                })
                .collect(),
            relationship_sources: graph.len(),
            referenced_total: referenced.len(),
            catalog_total: catalog.len(),
            overlaps,
            only_in_relationships,
            dangling_targets,
            missing: missing.iter().cloned().collect(),
        }
    }

    /// Whether every referenced id is defined.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Render the report as plain text with tables.
    pub fn render_human(&self) -> String {
        let mut out = String::new();

        let mut counts = Table::new(vec!["Source", "Records"]).align_right(1);
        for source in &self.sources {
            counts.add_row(vec![source.name.clone(), source.records.to_string()]);
        }
        counts.add_row(vec![
            RELATIONSHIPS_LABEL.to_string(),
            self.relationship_sources.to_string(),
        ]);
        let _ = writeln!(out, "{}", counts.render());

        let _ = writeln!(out, "Referenced ids: {}", self.referenced_total);
        let _ = writeln!(out, "Catalog records: {}", self.catalog_total);

        if !self.overlaps.is_empty() {
            let mut overlaps =
                Table::new(vec!["Left", "Right", "Shared", "Only left", "Only right"])
                    .align_right(2)
                    .align_right(3)
                    .align_right(4);
            for o in &self.overlaps {
                overlaps.add_row(vec![
                    o.left.clone(),
                    o.right.clone(),
                    o.shared.to_string(),
                    o.only_left.to_string(),
                    o.only_right.to_string(),
                ]);
            }
            let _ = writeln!(out, "\n{}", overlaps.render());
        }

        let _ = writeln!(
            out,
            "\nOnly in relationships: {}",
            self.only_in_relationships.len()
        );
        let _ = writeln!(
            out,
            "Relationship targets not in any source: {}",
            self.dangling_targets.len()
        );

        if self.missing.is_empty() {
            let _ = writeln!(out, "No missing exercises");
        } else {
            let _ = writeln!(out, "\nMissing exercises ({}):", self.missing.len());
            for id in &self.missing {
                let _ = writeln!(out, "  - {}", id);
            }
        }

        out
    }
}

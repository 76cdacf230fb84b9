//! Regression/progression relationships between exercises.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::ExerciseId;

/// Direction of a relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationKind {
    /// Easier variant.
    Regression,
    /// Harder variant.
    Progression,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Regression => write!(f, "regression"),
            RelationKind::Progression => write!(f, "progression"),
        }
    }
}

/// A relationship target.
///
/// Only `exerciseId` is interpreted; any other fields (`reason`,
/// `difficulty`, ...) are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Relation {
    /// Target exercise.
    #[serde(rename = "exerciseId")]
    pub exercise_id: ExerciseId,

    /// Uninterpreted fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Relation {
    /// Create a relation with no extra fields.
    pub fn to(exercise_id: ExerciseId) -> Self {
        Self {
            exercise_id,
            extra: BTreeMap::new(),
        }
    }
}

/// Outgoing relationships of one exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Relations {
    /// Easier variants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regressions: Vec<Relation>,

    /// Harder variants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub progressions: Vec<Relation>,
}

impl Relations {
    /// Iterate over all targets tagged with their kind, regressions first.
    pub fn targets(&self) -> impl Iterator<Item = (RelationKind, &Relation)> {
        self.regressions
            .iter()
            .map(|r| (RelationKind::Regression, r))
            .chain(
                self.progressions
                    .iter()
                    .map(|r| (RelationKind::Progression, r)),
            )
    }

    /// Relations of the given kind.
    pub fn of_kind(&self, kind: RelationKind) -> &[Relation] {
        match kind {
            RelationKind::Regression => &self.regressions,
            RelationKind::Progression => &self.progressions,
        }
    }

    /// Mutable access to relations of the given kind.
    pub fn of_kind_mut(&mut self, kind: RelationKind) -> &mut Vec<Relation> {
        match kind {
            RelationKind::Regression => &mut self.regressions,
            RelationKind::Progression => &mut self.progressions,
        }
    }
}

/// A directed edge in the relationship graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a> {
    pub from: &'a ExerciseId,
    pub to: &'a ExerciseId,
    pub kind: RelationKind,
}

/// Mapping from exercise id to its outgoing relationships.
///
/// Edge targets may name exercises that no catalog defines; these dangling
/// references are what inference fills in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RelationshipGraph {
    nodes: BTreeMap<ExerciseId, Relations>,
}

impl RelationshipGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the relationships of one source exercise, replacing any previous entry.
    pub fn insert(&mut self, id: ExerciseId, relations: Relations) {
        self.nodes.insert(id, relations);
    }

    /// Add a single edge, creating the source entry if needed.
    pub fn add_edge(&mut self, from: ExerciseId, kind: RelationKind, to: ExerciseId) {
        self.nodes
            .entry(from)
            .or_default()
            .of_kind_mut(kind)
            .push(Relation::to(to));
    }

    /// Relationships of one exercise.
    pub fn get(&self, id: &str) -> Option<&Relations> {
        self.nodes.get(id)
    }

    /// Source ids (keys) in sorted order.
    pub fn sources(&self) -> impl Iterator<Item = &ExerciseId> {
        self.nodes.keys()
    }

    /// Every edge, grouped by source id in sorted order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.nodes.iter().flat_map(|(from, relations)| {
            relations.targets().map(move |(kind, rel)| Edge {
                from,
                to: &rel.exercise_id,
                kind,
            })
        })
    }

    /// Number of source ids.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no source ids.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ExerciseId {
        ExerciseId::parse(s).unwrap()
    }

    #[test]
    fn relation_keeps_extra_fields() {
        let json = r#"{"exerciseId":"knee-push-up","reason":"Less load","difficulty":0.7}"#;
        let rel: Relation = serde_json::from_str(json).unwrap();
        assert_eq!(rel.exercise_id.as_str(), "knee-push-up");
        assert_eq!(rel.extra["reason"], "Less load");

        let back = serde_json::to_value(&rel).unwrap();
        assert_eq!(back["difficulty"], 0.7);
    }

    #[test]
    fn relations_default_to_empty_lists() {
        let rels: Relations = serde_json::from_str("{}").unwrap();
        assert!(rels.regressions.is_empty());
        assert!(rels.progressions.is_empty());
    }

    #[test]
    fn edges_walk_regressions_then_progressions() {
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("push-up"), RelationKind::Progression, id("archer-push-up"));
        graph.add_edge(id("push-up"), RelationKind::Regression, id("knee-push-up"));

        let edges: Vec<_> = graph
            .edges()
            .map(|e| (e.from.as_str(), e.kind, e.to.as_str()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("push-up", RelationKind::Regression, "knee-push-up"),
                ("push-up", RelationKind::Progression, "archer-push-up"),
            ]
        );
    }

    #[test]
    fn relation_kind_display() {
        assert_eq!(RelationKind::Regression.to_string(), "regression");
        assert_eq!(RelationKind::Progression.to_string(), "progression");
    }
}

//! Progression cycle detection.
//!
//! Following progressions should always lead to harder exercises, so a path
//! that returns to its start is almost certainly a data error.

use std::collections::{BTreeSet, HashSet};

use crate::catalog::{ExerciseId, RelationKind, RelationshipGraph};
use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity};

/// Detects cycles along progression edges.
pub struct ProgressionCycleRule;

impl LintRule for ProgressionCycleRule {
    fn id(&self) -> RuleId {
        RuleId::new("progression-cycle")
    }

    fn name(&self) -> &str {
        "Progression Cycle"
    }

    fn description(&self) -> &str {
        "Detects progression chains that loop back to an earlier exercise"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        let mut reported = HashSet::new();

        for start in ctx.graph.sources() {
            if let Some(cycle) = find_cycle(ctx.graph, start) {
                // Each cycle is reported once, whichever member finds it first.
                let key: BTreeSet<&ExerciseId> = cycle.iter().copied().collect();
                if reported.insert(key) {
                    let path: Vec<&str> = cycle.iter().map(|id| id.as_str()).collect();
                    diagnostics.push(
                        LintDiagnostic::new(
                            self.id(),
                            self.default_severity(),
                            format!("Progression cycle detected: {}", path.join(" -> ")),
                        )
                        .with_exercise(cycle[0].clone()),
                    );
                }
            }
        }

        diagnostics
    }
}

fn find_cycle<'g>(graph: &'g RelationshipGraph, start: &'g ExerciseId) -> Option<Vec<&'g ExerciseId>> {
    let mut visited = HashSet::new();
    let mut path = Vec::new();
    dfs(graph, start, &mut visited, &mut path)
}

fn dfs<'g>(
    graph: &'g RelationshipGraph,
    current: &'g ExerciseId,
    visited: &mut HashSet<&'g ExerciseId>,
    path: &mut Vec<&'g ExerciseId>,
) -> Option<Vec<&'g ExerciseId>> {
    if let Some(pos) = path.iter().position(|id| *id == current) {
        let mut cycle = path[pos..].to_vec();
        cycle.push(current);
        return Some(cycle);
    }
    if !visited.insert(current) {
        return None;
    }

    path.push(current);
    if let Some(relations) = graph.get(current.as_str()) {
        for next in relations.of_kind(RelationKind::Progression) {
            // Self loops belong to the self-relationship rule.
            if next.exercise_id == *current {
                continue;
            }
            if let Some(cycle) = dfs(graph, &next.exercise_id, visited, path) {
                return Some(cycle);
            }
        }
    }
    path.pop();
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::fixtures::{catalog, id};

    fn check(graph: &RelationshipGraph) -> Vec<LintDiagnostic> {
        let catalog = catalog(&[]);
        ProgressionCycleRule.check(&LintContext::new(&catalog, graph))
    }

    #[test]
    fn detects_simple_cycle_once() {
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("a"), RelationKind::Progression, id("b"));
        graph.add_edge(id("b"), RelationKind::Progression, id("a"));

        let diagnostics = check(&graph);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("a -> b -> a"));
    }

    #[test]
    fn detects_longer_cycle() {
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("a"), RelationKind::Progression, id("b"));
        graph.add_edge(id("b"), RelationKind::Progression, id("c"));
        graph.add_edge(id("c"), RelationKind::Progression, id("a"));

        assert_eq!(check(&graph).len(), 1);
    }

    #[test]
    fn regressions_do_not_form_cycles() {
        // a progresses to b, b regresses to a: the normal symmetric case
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("a"), RelationKind::Progression, id("b"));
        graph.add_edge(id("b"), RelationKind::Regression, id("a"));

        assert!(check(&graph).is_empty());
    }

    #[test]
    fn chains_pass() {
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("a"), RelationKind::Progression, id("b"));
        graph.add_edge(id("b"), RelationKind::Progression, id("c"));

        assert!(check(&graph).is_empty());
    }
}

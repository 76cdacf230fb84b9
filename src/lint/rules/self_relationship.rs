//! Self-relationship detection.
//!
//! This rule detects exercises listed as their own regression or progression.

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity};

/// Detects exercises related to themselves.
pub struct SelfRelationshipRule;

impl LintRule for SelfRelationshipRule {
    fn id(&self) -> RuleId {
        RuleId::new("self-relationship")
    }

    fn name(&self) -> &str {
        "Self Relationship"
    }

    fn description(&self) -> &str {
        "Detects exercises that regress or progress to themselves"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        ctx.graph
            .edges()
            .filter(|edge| edge.from == edge.to)
            .map(|edge| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("'{}' lists itself as a {}", edge.from, edge.kind),
                )
                .with_exercise(edge.from.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RelationKind, RelationshipGraph};
    use crate::lint::rules::fixtures::{catalog, id};

    #[test]
    fn detects_self_relationship() {
        let catalog = catalog(&["a"]);
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("a"), RelationKind::Regression, id("a"));

        let diagnostics = SelfRelationshipRule.check(&LintContext::new(&catalog, &graph));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("itself as a regression"));
    }

    #[test]
    fn other_targets_pass() {
        let catalog = catalog(&["a", "b"]);
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("a"), RelationKind::Regression, id("b"));

        assert!(SelfRelationshipRule
            .check(&LintContext::new(&catalog, &graph))
            .is_empty());
    }
}

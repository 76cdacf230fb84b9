//! Relationship entries for exercises the catalog does not define.

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity};

/// Detects relationship keys with no catalog record.
pub struct UnknownExerciseRule;

impl LintRule for UnknownExerciseRule {
    fn id(&self) -> RuleId {
        RuleId::new("unknown-exercise")
    }

    fn name(&self) -> &str {
        "Unknown Exercise"
    }

    fn description(&self) -> &str {
        "Detects relationship entries for exercises missing from the catalog"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        ctx.graph
            .sources()
            .filter(|id| !ctx.catalog.contains(id.as_str()))
            .map(|id| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Relationships are defined for '{}' but the catalog has no such exercise", id),
                )
                .with_exercise(id.clone())
                .with_suggestion("Run `exercat build` to infer missing exercises")
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
    fn detects_unknown_source() {
        let catalog = catalog(&["a"]);
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("ghost"), RelationKind::Progression, id("a"));

        let diagnostics = UnknownExerciseRule.check(&LintContext::new(&catalog, &graph));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].exercise, Some(id("ghost")));
        assert_eq!(diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn known_sources_pass() {
        let catalog = catalog(&["a", "b"]);
        let mut graph = RelationshipGraph::new();
        graph.add_edge(id("a"), RelationKind::Progression, id("b"));

        assert!(UnknownExerciseRule
            .check(&LintContext::new(&catalog, &graph))
            .is_empty());
    }
}

//! Records without instructions.

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity};

/// Detects catalog records with no cues.
pub struct EmptyCuesRule;

impl LintRule for EmptyCuesRule {
    fn id(&self) -> RuleId {
        RuleId::new("empty-cues")
    }

    fn name(&self) -> &str {
        "Empty Cues"
    }

    fn description(&self) -> &str {
        "Detects exercises without instructional cues"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        ctx.catalog
            .iter()
            .filter(|(_, record)| record.cues.iter().all(|cue| cue.trim().is_empty()))
            .map(|(id, _)| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("'{}' has no cues", id),
                )
                .with_exercise(id.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ExerciseRecord, RelationshipGraph};
    use crate::lint::rules::fixtures::id;

    #[test]
    fn detects_missing_and_blank_cues() {
        let catalog: Catalog = [
            (id("a"), ExerciseRecord::default()),
            (
                id("b"),
                ExerciseRecord {
                    cues: vec!["  ".to_string()],
                    ..Default::default()
                },
            ),
            (
                id("c"),
                ExerciseRecord {
                    cues: vec!["Go.".to_string()],
                    ..Default::default()
                },
            ),
        ]
        .into_iter()
        .collect();
        let graph = RelationshipGraph::new();

        let diagnostics = EmptyCuesRule.check(&LintContext::new(&catalog, &graph));
        let flagged: Vec<_> = diagnostics.iter().filter_map(|d| d.exercise.clone()).collect();
        assert_eq!(flagged, vec![id("a"), id("b")]);
    }
}
